// src/core/sanitize.rs

pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// `R. Nadal (1)` → `R. Nadal`. Everything from the first `(` on is a seed
/// or entry marker (`(WC)`, `(Q)`, `(LL)`).
pub fn strip_seed(s: &str) -> String {
    let head = s.split('(').next().unwrap_or("");
    normalize_ws(head)
}

/// `felix-auger-aliassime` → `Felix Auger Aliassime`.
pub fn title_case_slug(slug: &str) -> String {
    slug.split('-')
        .filter(|t| !t.is_empty())
        .map(|t| {
            let mut chars = t.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect::<String>(),
                None => s!(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

/// Player profile links look like `/en/players/carlos-alcaraz/a0e2/overview`;
/// the slug is the segment after `players`.
pub fn player_slug(href: &str) -> Option<&str> {
    let mut parts = href.split('/').filter(|p| !p.is_empty());
    parts.find(|p| p.eq_ignore_ascii_case(crate::config::consts::PLAYER_PATH))?;
    parts.next()
}

/// Keep ASCII digits only; score cells carry stray whitespace and markup noise.
pub fn digits_only(s: &str) -> String {
    s.chars().filter(|c| c.is_ascii_digit()).collect()
}
