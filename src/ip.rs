//! Validators for IPv4 and IPv6 literals.
//!
//! Both validators are explicit state machines over the bytes of the literal
//! and produce the address value on success.

use crate::pct_enc::decode_hexdigit;

#[derive(Clone, Copy, PartialEq, Eq)]
enum V4State {
    ExpectDigit,
    InOctet,
}

/// Parses a dotted-quad IPv4 address.
///
/// Exactly four dot-separated groups of decimal digits are required, each
/// with a value no greater than 255. Leading zeros are accepted, so `01`
/// is parsed as `1`.
pub(crate) fn parse_v4(s: &[u8]) -> Option<[u8; 4]> {
    let mut octets = [0u8; 4];
    let mut i = 0;
    let mut value = 0u32;
    let mut state = V4State::ExpectDigit;

    for &x in s {
        match (state, x) {
            (_, b'0'..=b'9') => {
                value = value * 10 + (x - b'0') as u32;
                if value > 255 {
                    return None;
                }
                state = V4State::InOctet;
            }
            (V4State::InOctet, b'.') => {
                if i == 3 {
                    // Too many groups.
                    return None;
                }
                octets[i] = value as u8;
                i += 1;
                value = 0;
                state = V4State::ExpectDigit;
            }
            _ => return None,
        }
    }

    if state != V4State::InOctet || i != 3 {
        // Empty group or too few groups.
        return None;
    }
    octets[3] = value as u8;
    Some(octets)
}

/// Failure of [`parse_v6`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Ipv6Error {
    /// Bad group count or width, double elision, or illegal character.
    Malformed,
    /// The trailing dotted quad starting at the given index is invalid.
    InvalidIpv4(usize),
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum V6State {
    Start,
    SeenLeadingColon,
    ExpectGroupOrEmbeddedIpv4,
    InHexGroup,
    InHexGroupMaybeIpv4,
    AfterGroupColon,
}

struct Groups {
    segs: [u16; 8],
    len: usize,
    ellipsis: Option<usize>,
}

impl Groups {
    fn push(&mut self, seg: u16) -> Result<(), Ipv6Error> {
        if self.len == 8 {
            return Err(Ipv6Error::Malformed);
        }
        self.segs[self.len] = seg;
        self.len += 1;
        Ok(())
    }

    fn elide(&mut self) -> Result<(), Ipv6Error> {
        if self.ellipsis.is_some() {
            return Err(Ipv6Error::Malformed);
        }
        self.ellipsis = Some(self.len);
        Ok(())
    }

    fn finish(mut self) -> Result<[u16; 8], Ipv6Error> {
        match self.ellipsis {
            None if self.len == 8 => Ok(self.segs),
            // The elision must stand in for at least one group.
            Some(start) if self.len < 8 => {
                // Shift the groups after the elision to the right.
                let n = self.len;
                for j in (start..n).rev() {
                    self.segs[8 - (n - j)] = self.segs[j];
                    self.segs[j] = 0;
                }
                Ok(self.segs)
            }
            _ => Err(Ipv6Error::Malformed),
        }
    }
}

/// Parses an IPv6 address, without the surrounding brackets.
///
/// Groups are one to four hexadecimal digits. A single `::` elides one or
/// more zero groups. A dotted-quad IPv4 address may take the place of the
/// last two groups.
pub(crate) fn parse_v6(s: &[u8]) -> Result<[u16; 8], Ipv6Error> {
    use V6State::*;

    let mut groups = Groups {
        segs: [0; 8],
        len: 0,
        ellipsis: None,
    };
    let mut state = Start;
    let mut group_start = 0;
    let mut digits = 0;
    let mut value = 0u16;

    for (i, &x) in s.iter().enumerate() {
        state = match state {
            Start | ExpectGroupOrEmbeddedIpv4 | AfterGroupColon if x == b':' => match state {
                Start => SeenLeadingColon,
                AfterGroupColon => {
                    groups.elide()?;
                    ExpectGroupOrEmbeddedIpv4
                }
                // Triple colons.
                _ => return Err(Ipv6Error::Malformed),
            },
            Start | ExpectGroupOrEmbeddedIpv4 | AfterGroupColon => {
                let Some(v) = decode_hexdigit(x) else {
                    return Err(Ipv6Error::Malformed);
                };
                group_start = i;
                digits = 1;
                value = v as u16;
                if x.is_ascii_digit() {
                    InHexGroupMaybeIpv4
                } else {
                    InHexGroup
                }
            }
            SeenLeadingColon => {
                if x != b':' {
                    // A leading colon must start an elision.
                    return Err(Ipv6Error::Malformed);
                }
                groups.elide()?;
                ExpectGroupOrEmbeddedIpv4
            }
            InHexGroup | InHexGroupMaybeIpv4 if x == b':' => {
                groups.push(value)?;
                AfterGroupColon
            }
            InHexGroupMaybeIpv4 if x == b'.' => {
                // The rest is a dotted quad standing in for two groups.
                let Some(octets) = parse_v4(&s[group_start..]) else {
                    return Err(Ipv6Error::InvalidIpv4(group_start));
                };
                groups.push(u16::from_be_bytes([octets[0], octets[1]]))?;
                groups.push(u16::from_be_bytes([octets[2], octets[3]]))?;
                return groups.finish();
            }
            InHexGroup | InHexGroupMaybeIpv4 => {
                let Some(v) = decode_hexdigit(x) else {
                    return Err(Ipv6Error::Malformed);
                };
                digits += 1;
                if digits > 4 {
                    return Err(Ipv6Error::Malformed);
                }
                value = (value << 4) | v as u16;
                if state == InHexGroupMaybeIpv4 && x.is_ascii_digit() {
                    InHexGroupMaybeIpv4
                } else {
                    InHexGroup
                }
            }
        };
    }

    match state {
        InHexGroup | InHexGroupMaybeIpv4 => groups.push(value)?,
        ExpectGroupOrEmbeddedIpv4 => {}
        // Empty input, or a dangling single colon.
        Start | SeenLeadingColon | AfterGroupColon => return Err(Ipv6Error::Malformed),
    }
    groups.finish()
}
