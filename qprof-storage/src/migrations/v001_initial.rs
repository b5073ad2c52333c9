//! V001: profiles, active_rules, active_rule_params.

pub const MIGRATION_SQL: &str = r#"
-- Quality profiles: named per-language rule collections.
CREATE TABLE IF NOT EXISTS profiles (
    kee TEXT PRIMARY KEY,
    name TEXT NOT NULL,
    language TEXT NOT NULL
) STRICT;

-- Active rules: one rule enabled within one profile.
-- At most one row per (profile, rule) pair.
CREATE TABLE IF NOT EXISTS active_rules (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    profile_kee TEXT NOT NULL REFERENCES profiles(kee) ON DELETE CASCADE,
    rule_key TEXT NOT NULL,
    severity TEXT NOT NULL,
    UNIQUE (profile_kee, rule_key)
) STRICT;

CREATE INDEX IF NOT EXISTS idx_active_rules_profile ON active_rules(profile_kee);

-- Parameter overrides of an active rule.
CREATE TABLE IF NOT EXISTS active_rule_params (
    active_rule_id INTEGER NOT NULL REFERENCES active_rules(id) ON DELETE CASCADE,
    name TEXT NOT NULL,
    value TEXT NOT NULL,
    PRIMARY KEY (active_rule_id, name)
) STRICT;
"#;
