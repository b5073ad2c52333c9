//! Built-in XML exporter/importer pair (key `xml`).
//!
//! Owns the native byte format:
//!
//! ```xml
//! <?xml version="1.0" encoding="UTF-8"?>
//! <profile>
//!   <name>Sonar way</name>
//!   <language>java</language>
//!   <rules>
//!     <rule>
//!       <key>squid:S100</key>
//!       <severity>MAJOR</severity>
//!       <parameters>
//!         <parameter><key>max</key><value>10</value></parameter>
//!       </parameters>
//!     </rule>
//!   </rules>
//! </profile>
//! ```

use std::collections::BTreeMap;
use std::io::{Read, Write};

use qprof_core::errors::ExchangeError;
use qprof_core::types::Severity;
use quick_xml::events::Event;
use quick_xml::Reader;

use crate::model::RulesProfile;
use crate::registry::{ProfileExporter, ProfileImporter};
use crate::validation::ValidationMessages;

pub const XML_FORMAT_KEY: &str = "xml";

/// Exporter for the native XML format. No language restriction.
pub struct XmlProfileExporter;

impl ProfileExporter for XmlProfileExporter {
    fn key(&self) -> &str {
        XML_FORMAT_KEY
    }

    fn name(&self) -> &str {
        "Quality profile XML"
    }

    fn mime_type(&self) -> &str {
        "application/xml"
    }

    fn export_profile(
        &self,
        profile: &RulesProfile,
        out: &mut dyn Write,
    ) -> Result<(), ExchangeError> {
        let mut xml = String::new();
        xml.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
        xml.push_str("<profile>\n");
        xml.push_str(&format!("  <name>{}</name>\n", escape_xml(&profile.name)));
        xml.push_str(&format!(
            "  <language>{}</language>\n",
            escape_xml(&profile.language)
        ));
        xml.push_str("  <rules>\n");

        for rule in profile.active_rules() {
            xml.push_str("    <rule>\n");
            xml.push_str(&format!(
                "      <key>{}</key>\n",
                escape_xml(rule.rule_key.as_str())
            ));
            xml.push_str(&format!(
                "      <severity>{}</severity>\n",
                rule.severity.as_str()
            ));
            if !rule.params.is_empty() {
                xml.push_str("      <parameters>\n");
                for (name, value) in &rule.params {
                    xml.push_str(&format!(
                        "        <parameter><key>{}</key><value>{}</value></parameter>\n",
                        escape_xml(name),
                        escape_xml(value)
                    ));
                }
                xml.push_str("      </parameters>\n");
            }
            xml.push_str("    </rule>\n");
        }

        xml.push_str("  </rules>\n");
        xml.push_str("</profile>\n");
        out.write_all(xml.as_bytes())?;
        Ok(())
    }
}

fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

/// Importer for the native XML format.
///
/// Malformed XML, a rule without a key, or an unknown severity all
/// become validation errors; the pipeline decides what to do with
/// them. Only I/O failures are hard errors.
pub struct XmlProfileImporter;

impl ProfileImporter for XmlProfileImporter {
    fn key(&self) -> &str {
        XML_FORMAT_KEY
    }

    fn name(&self) -> &str {
        "Quality profile XML"
    }

    fn import_profile(
        &self,
        input: &mut dyn Read,
    ) -> Result<(RulesProfile, ValidationMessages), ExchangeError> {
        let mut bytes = Vec::new();
        input.read_to_end(&mut bytes)?;

        let mut messages = ValidationMessages::new();
        let text = match String::from_utf8(bytes) {
            Ok(text) => text,
            Err(_) => {
                messages.add_error("Profile document is not valid UTF-8");
                return Ok((RulesProfile::new("", ""), messages));
            }
        };

        Ok(parse_profile(&text, messages))
    }
}

#[derive(Default)]
struct PendingRule {
    key: Option<String>,
    severity: Option<String>,
    params: BTreeMap<String, String>,
}

fn parse_profile(text: &str, mut messages: ValidationMessages) -> (RulesProfile, ValidationMessages) {
    let mut reader = Reader::from_str(text);
    reader.config_mut().trim_text(true);

    let mut profile = RulesProfile::new("", "");
    let mut path: Vec<String> = Vec::new();
    let mut rule: Option<PendingRule> = None;
    let mut param_key: Option<String> = None;
    let mut param_value: Option<String> = None;
    let mut rule_count = 0usize;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => {
                let name = String::from_utf8_lossy(e.name().as_ref()).into_owned();
                if name == "rule" {
                    rule = Some(PendingRule::default());
                    rule_count += 1;
                } else if name == "parameter" {
                    param_key = None;
                    param_value = None;
                }
                path.push(name);
            }
            Ok(Event::Text(t)) => {
                let value = match t.unescape() {
                    Ok(value) => value.into_owned(),
                    Err(e) => {
                        messages.add_error(format!("Invalid XML text: {e}"));
                        break;
                    }
                };
                match element_context(&path) {
                    Context::ProfileName => profile.name = value,
                    Context::ProfileLanguage => profile.language = value,
                    Context::RuleKey => {
                        if let Some(rule) = rule.as_mut() {
                            rule.key = Some(value);
                        }
                    }
                    Context::RuleSeverity => {
                        if let Some(rule) = rule.as_mut() {
                            rule.severity = Some(value);
                        }
                    }
                    Context::ParameterKey => param_key = Some(value),
                    Context::ParameterValue => param_value = Some(value),
                    Context::Other => {}
                }
            }
            Ok(Event::End(e)) => {
                let name = String::from_utf8_lossy(e.name().as_ref()).into_owned();
                path.pop();
                if name == "parameter" {
                    match (param_key.take(), param_value.take()) {
                        (Some(key), Some(value)) => {
                            if let Some(rule) = rule.as_mut() {
                                rule.params.insert(key, value);
                            }
                        }
                        _ => messages
                            .add_warning(format!("Parameter of rule {rule_count} is incomplete, ignored")),
                    }
                } else if name == "rule" {
                    if let Some(pending) = rule.take() {
                        finish_rule(pending, rule_count, &mut profile, &mut messages);
                    }
                }
            }
            Ok(Event::Empty(e)) => {
                // Self-closing spelling of an element, same
                // diagnostics as an empty Start/End pair.
                let name = String::from_utf8_lossy(e.name().as_ref()).into_owned();
                if name == "rule" {
                    rule_count += 1;
                    finish_rule(PendingRule::default(), rule_count, &mut profile, &mut messages);
                } else if name == "parameter" {
                    messages.add_warning(format!(
                        "Parameter of rule {rule_count} is incomplete, ignored"
                    ));
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                messages.add_error(format!("Malformed XML: {e}"));
                break;
            }
            Ok(_) => {}
        }
    }

    (profile, messages)
}

fn finish_rule(
    pending: PendingRule,
    position: usize,
    profile: &mut RulesProfile,
    messages: &mut ValidationMessages,
) {
    let Some(key) = pending.key else {
        messages.add_error(format!("Rule {position} has no key"));
        return;
    };
    let severity = match pending.severity {
        Some(s) => match Severity::parse(&s) {
            Some(severity) => severity,
            None => {
                messages.add_error(format!("Rule {key} has unknown severity \"{s}\""));
                return;
            }
        },
        None => {
            messages.add_error(format!("Rule {key} has no severity"));
            return;
        }
    };
    profile.activate_rule(key, severity, pending.params);
}

/// Where in the document a text node sits.
enum Context {
    ProfileName,
    ProfileLanguage,
    RuleKey,
    RuleSeverity,
    ParameterKey,
    ParameterValue,
    Other,
}

fn element_context(path: &[String]) -> Context {
    let tail: Vec<&str> = path.iter().map(|s| s.as_str()).collect();
    match tail.as_slice() {
        ["profile", "name"] => Context::ProfileName,
        ["profile", "language"] => Context::ProfileLanguage,
        [.., "rule", "key"] => Context::RuleKey,
        [.., "rule", "severity"] => Context::RuleSeverity,
        [.., "parameter", "key"] => Context::ParameterKey,
        [.., "parameter", "value"] => Context::ParameterValue,
        _ => Context::Other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn import(text: &str) -> (RulesProfile, ValidationMessages) {
        XmlProfileImporter
            .import_profile(&mut text.as_bytes())
            .unwrap()
    }

    #[test]
    fn export_escapes_special_characters() {
        let mut profile = RulesProfile::new("Sonar <way>", "java");
        profile.activate_rule(
            "squid:S100",
            Severity::Major,
            BTreeMap::from([("format".to_string(), "a&b\"c".to_string())]),
        );

        let mut out = Vec::new();
        XmlProfileExporter.export_profile(&profile, &mut out).unwrap();
        let xml = String::from_utf8(out).unwrap();
        assert!(xml.contains("Sonar &lt;way&gt;"));
        assert!(xml.contains("a&amp;b&quot;c"));
        assert!(!xml.contains("Sonar <way>"));
    }

    #[test]
    fn import_reads_rules_and_params() {
        let (profile, messages) = import(
            r#"<?xml version="1.0" encoding="UTF-8"?>
            <profile>
              <name>Sonar way</name>
              <language>java</language>
              <rules>
                <rule>
                  <key>squid:S100</key>
                  <severity>MAJOR</severity>
                  <parameters>
                    <parameter><key>max</key><value>10</value></parameter>
                  </parameters>
                </rule>
              </rules>
            </profile>"#,
        );

        assert!(!messages.has_errors());
        assert_eq!(profile.name, "Sonar way");
        assert_eq!(profile.language, "java");
        assert_eq!(profile.active_rules().len(), 1);
        let rule = &profile.active_rules()[0];
        assert_eq!(rule.rule_key.as_str(), "squid:S100");
        assert_eq!(rule.severity, Severity::Major);
        assert_eq!(rule.params.get("max").map(String::as_str), Some("10"));
    }

    #[test]
    fn malformed_xml_is_a_validation_error() {
        let (_, messages) = import("<profile><rules><rule>");
        assert!(messages.has_errors());
    }

    #[test]
    fn rule_without_key_is_a_validation_error() {
        let (profile, messages) = import(
            "<profile><rules><rule><severity>MAJOR</severity></rule></rules></profile>",
        );
        assert!(messages.has_errors());
        assert!(profile.is_empty());
    }

    #[test]
    fn self_closing_rule_matches_empty_rule_diagnostics() {
        let (profile, messages) = import("<profile><rules><rule/></rules></profile>");
        assert!(profile.is_empty());
        assert_eq!(messages.errors(), &["Rule 1 has no key"]);

        let (expanded_profile, expanded) =
            import("<profile><rules><rule></rule></rules></profile>");
        assert!(expanded_profile.is_empty());
        assert_eq!(expanded.errors(), messages.errors());
    }

    #[test]
    fn self_closing_parameter_is_a_warning() {
        let (profile, messages) = import(
            "<profile><rules><rule><key>r1</key><severity>MAJOR</severity>\
             <parameters><parameter/></parameters></rule></rules></profile>",
        );
        assert!(!messages.has_errors());
        assert_eq!(messages.warnings().len(), 1);
        assert_eq!(profile.active_rules().len(), 1);
        assert!(profile.active_rules()[0].params.is_empty());
    }

    #[test]
    fn unknown_severity_is_a_validation_error() {
        let (profile, messages) = import(
            "<profile><rules><rule><key>r1</key><severity>HUGE</severity></rule></rules></profile>",
        );
        assert!(messages.has_errors());
        assert!(profile.is_empty());
        assert!(messages.errors()[0].contains("HUGE"));
    }

    #[test]
    fn non_utf8_input_is_a_validation_error() {
        let bytes: &[u8] = &[0xff, 0xfe, 0x00];
        let (_, messages) = XmlProfileImporter
            .import_profile(&mut std::io::Cursor::new(bytes))
            .unwrap();
        assert!(messages.has_errors());
    }
}
