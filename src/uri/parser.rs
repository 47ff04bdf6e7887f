use super::Uri;
use crate::{
    error::{err, Result},
    ip::{self, Ipv6Error},
    pct_enc::{
        self,
        table::{ALPHA, FRAGMENT, HEXDIG, IPV_FUTURE, PCHAR, QUERY, REG_NAME, SCHEME, USERINFO},
        Decoder,
    },
};
use alloc::{string::String, vec, vec::Vec};

/// Parses a URI reference into a fresh `Uri`.
///
/// The input is split into components in the order scheme, authority,
/// path, query and fragment. Every component is validated and decoded
/// before the next one is looked at, and error indexes are relative to
/// the whole input.
pub(super) fn parse(s: &str) -> Result<Uri> {
    let mut out = Uri::default();

    let mut pos = 0;
    if let Some((scheme, rest_start)) = parse_scheme(s)? {
        out.scheme = scheme;
        pos = rest_start;
    }

    let path_end = s[pos..]
        .find(|c: char| c == '?' || c == '#')
        .map_or(s.len(), |i| pos + i);

    if s[pos..path_end].starts_with("//") {
        let auth_start = pos + 2;
        let auth_end = s[auth_start..path_end]
            .find('/')
            .map_or(path_end, |i| auth_start + i);
        parse_authority(s, auth_start, auth_end, &mut out)?;
        pos = auth_end;
    }

    out.path = parse_path(&s[pos..path_end]).map_err(|e| e.offset(pos))?;
    if out.has_authority() && out.path.is_empty() {
        out.path.push(Vec::new());
    }

    let tail = &s[path_end..];
    let (query_part, fragment_start) = match tail.find('#') {
        Some(i) => (&tail[..i], Some(path_end + i + 1)),
        None => (tail, None),
    };

    if let Some(query) = query_part.strip_prefix('?') {
        let decoded = pct_enc::decode(query, QUERY).map_err(|e| e.offset(path_end + 1))?;
        out.query = Some(decoded);
    }

    if let Some(start) = fragment_start {
        let decoded = pct_enc::decode(&s[start..], FRAGMENT).map_err(|e| e.offset(start))?;
        out.fragment = Some(decoded);
    }

    Ok(out)
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum SchemeState {
    First,
    Rest,
}

/// Looks for a scheme before the first `/`, `?` or `#`.
///
/// Returns the lowercased scheme and the index just past its `:`,
/// or `None` if there is no scheme.
fn parse_scheme(s: &str) -> Result<Option<(String, usize)>> {
    let prefix_end = s
        .find(|c: char| matches!(c, '/' | '?' | '#'))
        .unwrap_or(s.len());
    let Some(colon) = s[..prefix_end].find(':') else {
        return Ok(None);
    };

    let mut state = SchemeState::First;
    for (i, x) in s[..colon].bytes().enumerate() {
        let allowed = match state {
            SchemeState::First => ALPHA.allows(x),
            SchemeState::Rest => SCHEME.allows(x),
        };
        if !allowed {
            err!(i, InvalidScheme);
        }
        state = SchemeState::Rest;
    }
    if state == SchemeState::First {
        // Empty scheme.
        err!(colon, InvalidScheme);
    }

    Ok(Some((s[..colon].to_ascii_lowercase(), colon + 1)))
}

/// Parses `s[start..end]` as `[ userinfo "@" ] host [ ":" port ]`.
fn parse_authority(s: &str, start: usize, end: usize, out: &mut Uri) -> Result<()> {
    let auth = &s[start..end];

    let host_start = match auth.rfind('@') {
        Some(i) => {
            out.user_info =
                pct_enc::decode(&auth[..i], USERINFO).map_err(|e| e.offset(start))?;
            start + i + 1
        }
        None => start,
    };

    let (host, port) = parse_host_port(&s[host_start..end]).map_err(|e| e.offset(host_start))?;
    out.host = host;
    out.port = port;
    Ok(())
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum HostState {
    Start,
    RegNamePlain,
    PercentEscape,
    IpLiteralOpen,
    Ipv6Body,
    IpvFutureVersion,
    IpvFutureBody,
    ExpectColonOrEnd,
    PortDigits,
}

/// Parses `host [ ":" port ]`.
///
/// Registered names are percent-decoded and lowercased. IP literals are
/// returned without brackets and with their case preserved.
fn parse_host_port(s: &str) -> Result<(Vec<u8>, Option<u16>)> {
    use HostState::*;

    let mut host = Vec::new();
    let mut state = Start;
    let mut dec = Decoder::new();
    let mut pct_start = 0;
    let mut port_start = 0;

    for (i, x) in s.bytes().enumerate() {
        state = match state {
            Start if x == b'[' => IpLiteralOpen,
            Start | RegNamePlain => match x {
                b'%' => {
                    dec = Decoder::new();
                    pct_start = i;
                    PercentEscape
                }
                b':' => {
                    port_start = i + 1;
                    PortDigits
                }
                _ if REG_NAME.allows(x) => {
                    host.push(x);
                    RegNamePlain
                }
                _ => err!(i, UnexpectedChar),
            },
            PercentEscape => {
                if !dec.feed(x) {
                    err!(pct_start, InvalidOctet);
                }
                match dec.decoded_byte() {
                    Some(decoded) => {
                        host.push(decoded);
                        RegNamePlain
                    }
                    None => PercentEscape,
                }
            }
            IpLiteralOpen if matches!(x, b'v' | b'V') => {
                host.push(x);
                IpvFutureVersion
            }
            IpLiteralOpen | Ipv6Body => {
                if x == b']' {
                    match ip::parse_v6(&host) {
                        Ok(_) => ExpectColonOrEnd,
                        // The address starts right after the "[".
                        Err(Ipv6Error::InvalidIpv4(j)) => err!(1 + j, InvalidIpv4Addr),
                        Err(Ipv6Error::Malformed) => err!(0, InvalidIpLiteral),
                    }
                } else {
                    host.push(x);
                    Ipv6Body
                }
            }
            IpvFutureVersion => {
                // At least one hexadecimal digit after the "v".
                if x == b'.' && host.len() > 1 {
                    host.push(x);
                    IpvFutureBody
                } else if HEXDIG.allows(x) {
                    host.push(x);
                    IpvFutureVersion
                } else {
                    err!(0, InvalidIpLiteral);
                }
            }
            IpvFutureBody => {
                // At least one character after the ".".
                if x == b']' && host.last() != Some(&b'.') {
                    ExpectColonOrEnd
                } else if IPV_FUTURE.allows(x) {
                    host.push(x);
                    IpvFutureBody
                } else {
                    err!(0, InvalidIpLiteral);
                }
            }
            ExpectColonOrEnd => {
                if x != b':' {
                    err!(i, UnexpectedChar);
                }
                port_start = i + 1;
                PortDigits
            }
            PortDigits => PortDigits,
        };
    }

    let port = match state {
        Start | RegNamePlain | ExpectColonOrEnd => None,
        PortDigits => parse_port(&s.as_bytes()[port_start..]).map_err(|e| e.offset(port_start))?,
        PercentEscape => err!(pct_start, InvalidOctet),
        IpLiteralOpen | Ipv6Body | IpvFutureVersion | IpvFutureBody => {
            // Unterminated IP literal.
            err!(0, InvalidIpLiteral)
        }
    };

    if !s.starts_with('[') {
        host.make_ascii_lowercase();
    }
    Ok((host, port))
}

/// Parses a port.
///
/// An empty port is treated as absent. A lone `0` is valid, but any other
/// value with a leading zero is rejected, as are signs and values above 65535.
fn parse_port(s: &[u8]) -> Result<Option<u16>> {
    match s {
        [] => Ok(None),
        [b'0'] => Ok(Some(0)),
        [b'0', ..] => err!(0, InvalidPort),
        _ => {
            let mut value = 0u32;
            for &x in s {
                if !x.is_ascii_digit() {
                    err!(0, InvalidPort);
                }
                value = value * 10 + (x - b'0') as u32;
                if value > u16::MAX as u32 {
                    err!(0, InvalidPort);
                }
            }
            Ok(Some(value as u16))
        }
    }
}

/// Splits a path on `/` and decodes every segment.
fn parse_path(s: &str) -> Result<Vec<Vec<u8>>> {
    match s {
        "" => Ok(Vec::new()),
        "/" => Ok(vec![Vec::new()]),
        _ => {
            let mut path = Vec::new();
            let mut offset = 0;
            for seg in s.split('/') {
                path.push(pct_enc::decode(seg, PCHAR).map_err(|e| e.offset(offset))?);
                offset += seg.len() + 1;
            }
            Ok(path)
        }
    }
}
