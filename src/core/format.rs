//! Format resolution: per-call overrides layered over instance defaults
//!
//! `resolve` turns a config + request pair into the final routing flags,
//! rendered text, and color for one submit. Routing is decided first so a
//! call that targets no sink builds no string and performs no work.

use super::color::Color;
use super::config::LoggerConfig;
use super::error::{LoggerError, Result};
use super::request::LogRequest;
use super::severity::Severity;
use super::style::StyleMap;
use super::timestamp::TimeFormat;
use chrono::{DateTime, Local};
use std::path::PathBuf;

/// The outcome of resolving one request: where it goes and what it says.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedWrite {
    pub text: String,
    pub color: Color,
    pub write_to_display: bool,
    pub write_to_file: bool,
    pub file_name: PathBuf,
}

/// Resolve a request against instance defaults.
///
/// Returns `Ok(None)` when neither sink is targeted; the submit succeeds
/// trivially without building the line. Template or time-pattern problems
/// surface as [`LoggerError::Format`].
pub fn resolve(
    config: &LoggerConfig,
    styles: &StyleMap,
    request: &LogRequest,
    now: DateTime<Local>,
) -> Result<Option<ResolvedWrite>> {
    let severity = request.severity;
    let is_debug = severity == Severity::DebugLog;

    let write_to_file = request
        .write_to_file
        .unwrap_or(config.write_to_file || (config.write_debug_to_file && is_debug));
    let write_to_display = request
        .write_to_display
        .unwrap_or(config.write_to_display && !(is_debug && !config.write_debug_to_display));

    if !write_to_file && !write_to_display {
        return Ok(None);
    }

    let mut text = render_template(&request.template, &request.args)?;

    if request.prepend_label.unwrap_or(config.prepend_severity_label) {
        let label = request
            .label
            .as_deref()
            .unwrap_or(&styles.get(severity).label);
        text = format!("{label} {text}");
    }

    let show_time = request
        .show_time
        .unwrap_or(config.show_time || (config.show_time_in_debug && is_debug));
    if show_time {
        let pattern = match (&request.time_format, request.show_date) {
            (Some(format), _) => format.clone(),
            (None, Some(true)) => TimeFormat::DateTime,
            (None, Some(false)) => TimeFormat::TimeOnly,
            (None, None) => config.time_format.clone(),
        };
        text = format!("{}: {}", pattern.format(&now)?, text);
    }

    let color = request.color.unwrap_or(styles.get(severity).color);
    let file_name = request
        .file_name
        .clone()
        .unwrap_or_else(|| config.file_name.clone());

    Ok(Some(ResolvedWrite {
        text,
        color,
        write_to_display,
        write_to_file,
        file_name,
    }))
}

/// Substitute `{0}`..`{N}` positional placeholders from `args`.
///
/// `{{` and `}}` are literal braces. An empty argument list passes the
/// template through verbatim. Out-of-range or malformed placeholders are
/// format errors, never panics.
pub fn render_template(template: &str, args: &[String]) -> Result<String> {
    if args.is_empty() {
        return Ok(template.to_string());
    }

    let mut out = String::with_capacity(template.len() + 16);
    let mut chars = template.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '{' => {
                if chars.peek() == Some(&'{') {
                    chars.next();
                    out.push('{');
                    continue;
                }
                let mut index = String::new();
                let mut closed = false;
                for d in chars.by_ref() {
                    if d == '}' {
                        closed = true;
                        break;
                    }
                    index.push(d);
                }
                if !closed {
                    return Err(LoggerError::format(template, "unterminated placeholder"));
                }
                let idx: usize = index.trim().parse().map_err(|_| {
                    LoggerError::format(template, format!("invalid placeholder '{{{index}}}'"))
                })?;
                let arg = args.get(idx).ok_or_else(|| {
                    LoggerError::format(
                        template,
                        format!(
                            "placeholder {{{idx}}} has no matching argument ({} supplied)",
                            args.len()
                        ),
                    )
                })?;
                out.push_str(arg);
            }
            '}' => {
                if chars.peek() == Some(&'}') {
                    chars.next();
                }
                out.push('}');
            }
            _ => out.push(c),
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_now() -> DateTime<Local> {
        Local
            .with_ymd_and_hms(2025, 1, 8, 10, 30, 45)
            .single()
            .expect("valid datetime")
    }

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_render_substitutes_positional_args() {
        let out = render_template("Hello {0}, you are {1}", &args(&["world", "late"])).unwrap();
        assert_eq!(out, "Hello world, you are late");
    }

    #[test]
    fn test_render_repeated_and_reordered() {
        let out = render_template("{1} {0} {1}", &args(&["a", "b"])).unwrap();
        assert_eq!(out, "b a b");
    }

    #[test]
    fn test_render_escaped_braces() {
        let out = render_template("{{literal}} {0}", &args(&["x"])).unwrap();
        assert_eq!(out, "{literal} x");
    }

    #[test]
    fn test_render_out_of_range_is_error() {
        let err = render_template("Hello {1}", &args(&["only"])).unwrap_err();
        assert!(matches!(err, LoggerError::Format { .. }));
    }

    #[test]
    fn test_render_unterminated_is_error() {
        let err = render_template("Hello {0", &args(&["x"])).unwrap_err();
        assert!(matches!(err, LoggerError::Format { .. }));
    }

    #[test]
    fn test_render_non_numeric_is_error() {
        let err = render_template("Hello {name}", &args(&["x"])).unwrap_err();
        assert!(matches!(err, LoggerError::Format { .. }));
    }

    #[test]
    fn test_render_no_args_is_verbatim() {
        let out = render_template("100% {not a placeholder}", &[]).unwrap();
        assert_eq!(out, "100% {not a placeholder}");
    }

    #[test]
    fn test_resolve_default_info() {
        let config = LoggerConfig::default();
        let styles = StyleMap::default();
        let request = LogRequest::new("Hello {0}").arg("world");

        let resolved = resolve(&config, &styles, &request, fixed_now())
            .unwrap()
            .unwrap();
        assert_eq!(resolved.text, "2025-01-08 10:30:45: Hello world");
        assert_eq!(resolved.color, Color::BLUE);
        assert!(resolved.write_to_display);
        assert!(resolved.write_to_file);
        assert_eq!(resolved.file_name, PathBuf::from("log.txt"));
    }

    #[test]
    fn test_resolve_short_circuits_without_building() {
        let config = LoggerConfig::default();
        let styles = StyleMap::default();
        // malformed template, but neither sink targeted: no string is built
        let request = LogRequest::new("{9}")
            .arg("x")
            .write_to_file(false)
            .write_to_display(false);

        let resolved = resolve(&config, &styles, &request, fixed_now()).unwrap();
        assert!(resolved.is_none());
    }

    #[test]
    fn test_resolve_debug_suppressed_from_display_by_default() {
        let config = LoggerConfig::default();
        let styles = StyleMap::default();
        let request = LogRequest::new("dbg").severity(Severity::DebugLog);

        let resolved = resolve(&config, &styles, &request, fixed_now())
            .unwrap()
            .unwrap();
        assert!(!resolved.write_to_display);
        // write_debug_to_file default keeps the file path live
        assert!(resolved.write_to_file);
    }

    #[test]
    fn test_resolve_debug_display_override_wins() {
        let config = LoggerConfig::default();
        let styles = StyleMap::default();
        let request = LogRequest::new("dbg")
            .severity(Severity::DebugLog)
            .write_to_display(true);

        let resolved = resolve(&config, &styles, &request, fixed_now())
            .unwrap()
            .unwrap();
        assert!(resolved.write_to_display);
    }

    #[test]
    fn test_resolve_debug_gets_time_via_show_time_in_debug() {
        let mut config = LoggerConfig::default();
        config.show_time = false;
        config.show_time_in_debug = true;
        let styles = StyleMap::default();

        let debug = LogRequest::new("dbg").severity(Severity::DebugLog);
        let resolved = resolve(&config, &styles, &debug, fixed_now())
            .unwrap()
            .unwrap();
        assert!(resolved.text.starts_with("2025-01-08 10:30:45: "));

        let info = LogRequest::new("msg");
        let resolved = resolve(&config, &styles, &info, fixed_now())
            .unwrap()
            .unwrap();
        assert_eq!(resolved.text, "msg");
    }

    #[test]
    fn test_resolve_label_prepend() {
        let mut config = LoggerConfig::default();
        config.prepend_severity_label = true;
        config.show_time = false;
        config.show_time_in_debug = false;
        let styles = StyleMap::default();

        for severity in Severity::ALL {
            let request = LogRequest::new("body").severity(severity);
            let resolved = resolve(&config, &styles, &request, fixed_now())
                .unwrap()
                .unwrap();
            let expected_label = &styles.get(severity).label;
            assert!(
                resolved.text.starts_with(&format!("{expected_label} ")),
                "severity {severity} rendered '{}'",
                resolved.text
            );
        }
    }

    #[test]
    fn test_resolve_label_override() {
        let config = LoggerConfig::default();
        let styles = StyleMap::default();
        let request = LogRequest::new("body")
            .prepend_label(true)
            .label("[Net]")
            .show_time(false);

        let resolved = resolve(&config, &styles, &request, fixed_now())
            .unwrap()
            .unwrap();
        assert_eq!(resolved.text, "[Net] body");
    }

    #[test]
    fn test_resolve_timestamp_outside_label() {
        let config = LoggerConfig::default();
        let styles = StyleMap::default();
        let request = LogRequest::new("body").prepend_label(true);

        let resolved = resolve(&config, &styles, &request, fixed_now())
            .unwrap()
            .unwrap();
        assert_eq!(resolved.text, "2025-01-08 10:30:45: [Info] body");
    }

    #[test]
    fn test_resolve_show_date_override_derives_pattern() {
        let config = LoggerConfig::default();
        let styles = StyleMap::default();

        let request = LogRequest::new("body").show_date(false);
        let resolved = resolve(&config, &styles, &request, fixed_now())
            .unwrap()
            .unwrap();
        assert_eq!(resolved.text, "10:30:45: body");

        // explicit time_format beats show_date
        let request = LogRequest::new("body")
            .show_date(false)
            .time_format(TimeFormat::Custom("%Y".into()));
        let resolved = resolve(&config, &styles, &request, fixed_now())
            .unwrap()
            .unwrap();
        assert_eq!(resolved.text, "2025: body");
    }

    #[test]
    fn test_resolve_color_override() {
        let config = LoggerConfig::default();
        let styles = StyleMap::default();
        let request = LogRequest::new("body").color(Color::rgb(7, 8, 9));

        let resolved = resolve(&config, &styles, &request, fixed_now())
            .unwrap()
            .unwrap();
        assert_eq!(resolved.color, Color::rgb(7, 8, 9));
    }

    #[test]
    fn test_resolve_per_call_file_name() {
        let config = LoggerConfig::default();
        let styles = StyleMap::default();
        let request = LogRequest::new("body").file_name("other.txt");

        let resolved = resolve(&config, &styles, &request, fixed_now())
            .unwrap()
            .unwrap();
        assert_eq!(resolved.file_name, PathBuf::from("other.txt"));
    }

    #[test]
    fn test_resolve_file_off_display_stays_on() {
        let mut config = LoggerConfig::default();
        config.write_to_file = false;
        config.write_debug_to_file = false;
        let styles = StyleMap::default();

        let request = LogRequest::new("body");
        let resolved = resolve(&config, &styles, &request, fixed_now())
            .unwrap()
            .unwrap();
        assert!(resolved.write_to_display);
        assert!(!resolved.write_to_file);
    }
}
