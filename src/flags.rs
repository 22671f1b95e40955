// src/flags.rs
//
// The draw page tags players with IOC-style three-letter codes (`#flag-esp`);
// the wiki's flag templates want ISO two-letter codes. Anything not listed
// passes through untouched.

pub fn alias(code: &str) -> &str {
    match code {
        "alb" => "al",
        "arg" => "ar",
        "arm" => "am",
        "aus" => "au",
        "aut" => "at",
        "bar" => "bb",
        "bel" => "be",
        "bih" => "ba",
        "blr" => "by",
        "bol" => "bo",
        "bra" => "br",
        "bul" => "bg",
        "can" => "ca",
        "chi" => "cl",
        "chn" => "cn",
        "col" => "co",
        "crc" => "cr",
        "cro" => "hr",
        "cyp" => "cy",
        "cze" => "cz",
        "den" => "dk",
        "dom" => "do",
        "ecu" => "ec",
        "egy" => "eg",
        "esa" => "sv",
        "esp" => "es",
        "est" => "ee",
        "fin" => "fi",
        "fra" => "fr",
        "gbr" => "gb",
        "geo" => "ge",
        "ger" => "de",
        "gre" => "gr",
        "gua" => "gt",
        "hkg" => "hk",
        "hun" => "hu",
        "ina" => "id",
        "ind" => "in",
        "irl" => "ie",
        "isl" => "is",
        "isr" => "il",
        "ita" => "it",
        "jam" => "jm",
        "jpn" => "jp",
        "kaz" => "kz",
        "kor" => "kr",
        "ksa" => "sa",
        "kuw" => "kw",
        "lat" => "lv",
        "lbn" => "lb",
        "ltu" => "lt",
        "lux" => "lu",
        "mar" => "ma",
        "mas" => "my",
        "mda" => "md",
        "mex" => "mx",
        "mkd" => "mk",
        "mon" => "mc",
        "mne" => "me",
        "ned" => "nl",
        "ngr" => "ng",
        "nor" => "no",
        "nzl" => "nz",
        "par" => "py",
        "per" => "pe",
        "phi" => "ph",
        "pol" => "pl",
        "por" => "pt",
        "pur" => "pr",
        "qat" => "qa",
        "rou" => "ro",
        "rsa" => "za",
        "rus" => "ru",
        "slo" => "si",
        "srb" => "rs",
        "sui" => "ch",
        "svk" => "sk",
        "swe" => "se",
        "tha" => "th",
        "tpe" => "tw",
        "tun" => "tn",
        "tur" => "tr",
        "uae" => "ae",
        "ukr" => "ua",
        "uru" => "uy",
        "usa" => "us",
        "uzb" => "uz",
        "ven" => "ve",
        "vie" => "vn",
        "zim" => "zw",
        other => other,
    }
}

/// Pull the code out of an SVG `<use href="...#flag-esp">` reference and alias it.
pub fn from_href(href: &str) -> Option<String> {
    let (_, code) = href.split_once(crate::config::consts::FLAG_FRAGMENT)?;
    let code = code.trim().to_ascii_lowercase();
    if code.is_empty() {
        return None;
    }
    Some(s!(alias(&code)))
}
