/// Resolve a free-text day token to 0-6 with Sunday = 0.
///
/// Accepts Portuguese full names (with or without the "-feira" suffix),
/// Portuguese abbreviations as they appear in raw availability lines
/// ("2a".."6a", "seg", "sab", ...) and English names, case-insensitively.
/// Unknown tokens resolve to `None`; callers warn and skip.
pub fn resolve_day_of_week(token: &str) -> Option<u8> {
    match token.trim().to_lowercase().as_str() {
        "domingo" | "dom" | "sunday" => Some(0),
        "segunda" | "segunda-feira" | "seg" | "2a" | "monday" => Some(1),
        "terça" | "terca" | "terça-feira" | "terca-feira" | "ter" | "3a" | "tuesday" => Some(2),
        "quarta" | "quarta-feira" | "qua" | "4a" | "wednesday" => Some(3),
        "quinta" | "quinta-feira" | "qui" | "5a" | "thursday" => Some(4),
        "sexta" | "sexta-feira" | "sex" | "6a" | "friday" => Some(5),
        "sábado" | "sabado" | "sáb" | "sab" | "saturday" => Some(6),
        _ => None,
    }
}

/// Lowercase English name for a resolved day, used when folding slots back
/// into the legacy representation.
pub fn day_name(day_of_week: u8) -> Option<&'static str> {
    match day_of_week {
        0 => Some("sunday"),
        1 => Some("monday"),
        2 => Some("tuesday"),
        3 => Some("wednesday"),
        4 => Some("thursday"),
        5 => Some("friday"),
        6 => Some("saturday"),
        _ => None,
    }
}
