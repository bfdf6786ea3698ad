use std::net::{Ipv4Addr, Ipv6Addr};

const MAX_ADDRESS_LEN: usize = 254;
const MAX_LOCAL_LEN: usize = 64;
const MAX_DOMAIN_LEN: usize = 253;
const MAX_LABEL_LEN: usize = 63;

/// Returns the lower-cased address when `value` is a syntactically valid
/// email address, `None` otherwise. The input is not trimmed.
pub fn normalize_email(value: &str) -> Option<String> {
    if is_valid_email(value) {
        Some(value.to_ascii_lowercase())
    } else {
        None
    }
}

/// Accepts `local@domain` where the local part is dot-separated atoms or
/// quoted strings, and the domain is either a host name whose last label
/// starts with a letter or a bracketed IPv4 / `IPv6:` literal.
pub fn is_valid_email(value: &str) -> bool {
    if value.is_empty() || value.len() > MAX_ADDRESS_LEN {
        return false;
    }

    // Quoted local parts may contain `@`; domains never do.
    let Some((local, domain)) = value.rsplit_once('@') else {
        return false;
    };

    is_valid_local_part(local) && is_valid_domain(domain)
}

fn is_valid_local_part(local: &str) -> bool {
    if local.is_empty() || local.len() > MAX_LOCAL_LEN {
        return false;
    }

    let bytes = local.as_bytes();
    let mut pos = 0;
    loop {
        pos = match bytes.get(pos) {
            Some(b'"') => match quoted_string_end(bytes, pos) {
                Some(end) => end,
                None => return false,
            },
            Some(_) => {
                let end = atom_end(bytes, pos);
                if end == pos {
                    return false;
                }
                end
            }
            None => return false,
        };

        match bytes.get(pos) {
            None => return true,
            Some(b'.') => pos += 1,
            Some(_) => return false,
        }
    }
}

fn atom_end(bytes: &[u8], start: usize) -> usize {
    let mut pos = start;
    while bytes.get(pos).copied().is_some_and(is_atext) {
        pos += 1;
    }
    pos
}

/// `start` points at the opening quote. Returns the index just past the
/// closing quote.
fn quoted_string_end(bytes: &[u8], start: usize) -> Option<usize> {
    let mut pos = start + 1;
    while let Some(&byte) = bytes.get(pos) {
        match byte {
            b'"' => return Some(pos + 1),
            b'\\' => match bytes.get(pos + 1) {
                Some(escaped) if escaped.is_ascii() => pos += 2,
                _ => return None,
            },
            b'\t' | 0x20..=0x7e => pos += 1,
            _ => return None,
        }
    }
    None
}

fn is_atext(byte: u8) -> bool {
    byte.is_ascii_alphanumeric()
        || matches!(
            byte,
            b'!' | b'#'
                | b'$'
                | b'%'
                | b'&'
                | b'\''
                | b'*'
                | b'+'
                | b'/'
                | b'='
                | b'?'
                | b'^'
                | b'_'
                | b'`'
                | b'{'
                | b'|'
                | b'}'
                | b'~'
                | b'-'
        )
}

fn is_valid_domain(domain: &str) -> bool {
    if let Some(literal) = domain.strip_prefix('[') {
        return literal
            .strip_suffix(']')
            .is_some_and(is_valid_address_literal);
    }

    if domain.is_empty() || domain.len() > MAX_DOMAIN_LEN {
        return false;
    }

    let labels: Vec<&str> = domain.split('.').collect();
    if labels.len() < 2 || !labels.iter().all(|label| is_valid_label(label)) {
        return false;
    }

    // Rejects bare IPv4 hosts and numeric TLDs; `xn--` labels start with `x`.
    labels
        .last()
        .and_then(|label| label.bytes().next())
        .is_some_and(|first| first.is_ascii_alphabetic())
}

fn is_valid_address_literal(literal: &str) -> bool {
    match literal.get(..5) {
        Some(prefix) if prefix.eq_ignore_ascii_case("ipv6:") => {
            literal[5..].parse::<Ipv6Addr>().is_ok()
        }
        _ => literal.parse::<Ipv4Addr>().is_ok(),
    }
}

fn is_valid_label(label: &str) -> bool {
    if label.is_empty() || label.len() > MAX_LABEL_LEN {
        return false;
    }
    if label.starts_with('-') || label.ends_with('-') {
        return false;
    }
    label.chars().all(|ch| ch.is_ascii_alphanumeric() || ch == '-')
}
