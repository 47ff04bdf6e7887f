//! Dot-segment removal, as described in
//! [Section 5.2.4 of RFC 3986](https://datatracker.ietf.org/doc/html/rfc3986/#section-5.2.4).

use alloc::vec::Vec;

enum SegKind {
    Dot,
    DoubleDot,
    Normal,
}

fn classify_segment(seg: &[u8]) -> SegKind {
    match seg {
        b"." => SegKind::Dot,
        b".." => SegKind::DoubleDot,
        _ => SegKind::Normal,
    }
}

/// Removes dot segments from a decoded segment sequence.
///
/// A `..` pops the last output segment unless the output is reduced to the
/// absolute root `[""]` or is empty; it is never emitted itself. An empty
/// segment directly after a dot segment or an empty segment is collapsed.
/// A trailing dot segment leaves a trailing empty segment behind, so
/// `a/b/..` becomes `a/`.
pub(crate) fn remove_dot_segments(path: &[Vec<u8>]) -> Vec<Vec<u8>> {
    let mut out: Vec<Vec<u8>> = Vec::with_capacity(path.len());
    // Whether the output currently ends at a directory boundary.
    let mut at_boundary = false;

    for seg in path {
        match classify_segment(seg) {
            SegKind::Dot => at_boundary = true,
            SegKind::DoubleDot => {
                if can_pop(&out) {
                    out.pop();
                }
                at_boundary = true;
            }
            SegKind::Normal => {
                if !at_boundary || !seg.is_empty() {
                    out.push(seg.clone());
                }
                at_boundary = seg.is_empty();
            }
        }
    }

    if at_boundary && matches!(out.last(), Some(last) if !last.is_empty()) {
        out.push(Vec::new());
    }
    out
}

fn can_pop(out: &[Vec<u8>]) -> bool {
    match out {
        [] => false,
        // The absolute root.
        [root] => !root.is_empty(),
        _ => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn normalize(path: &[&str]) -> Vec<Vec<u8>> {
        let path: Vec<Vec<u8>> = path.iter().map(|s| s.as_bytes().to_vec()).collect();
        remove_dot_segments(&path)
    }

    fn segs(path: &[&str]) -> Vec<Vec<u8>> {
        path.iter().map(|s| s.as_bytes().to_vec()).collect()
    }

    #[test]
    fn removes_dot_segments() {
        assert_eq!(normalize(&["", "a", "b", "c", ".", "..", "..", "g"]), segs(&["", "a", "g"]));
        assert_eq!(normalize(&["mid", "content=5", "..", "6"]), segs(&["mid", "6"]));
        assert_eq!(normalize(&["", "a", ".", "b"]), segs(&["", "a", "b"]));
        assert_eq!(normalize(&[".", "a"]), segs(&["a"]));
    }

    #[test]
    fn trailing_boundary() {
        assert_eq!(normalize(&["", "a", "b", "."]), segs(&["", "a", "b", ""]));
        assert_eq!(normalize(&["", "a", "b", ".."]), segs(&["", "a", ""]));
        assert_eq!(normalize(&["a", "", ".."]), segs(&["a", ""]));
        assert_eq!(normalize(&["", "a", ".."]), segs(&[""]));
        assert_eq!(normalize(&["", "."]), segs(&[""]));
    }

    #[test]
    fn cannot_pop_above_root() {
        assert_eq!(normalize(&["", "..", "g"]), segs(&["", "g"]));
        assert_eq!(normalize(&["", "a", "..", "..", "..", "g"]), segs(&["", "g"]));
        assert_eq!(normalize(&["", ".."]), segs(&[""]));
    }

    #[test]
    fn relative_underflow_is_dropped() {
        assert_eq!(normalize(&["..", "a"]), segs(&["a"]));
        assert_eq!(normalize(&["a", ".."]), segs(&[]));
        assert_eq!(normalize(&["a", "..", ""]), segs(&[]));
    }

    #[test]
    fn empty_segments() {
        assert_eq!(normalize(&[]), segs(&[]));
        assert_eq!(normalize(&[""]), segs(&[""]));
        assert_eq!(normalize(&["", "a", "", "b"]), segs(&["", "a", "", "b"]));
        assert_eq!(normalize(&["", "a", "", ""]), segs(&["", "a", ""]));
        assert_eq!(normalize(&["", ".", "", "a"]), segs(&["", "a"]));
    }

    #[test]
    fn dots_within_segments_are_kept() {
        assert_eq!(
            normalize(&["", "g.", ".g", "g..", "..g"]),
            segs(&["", "g.", ".g", "g..", "..g"])
        );
    }

    #[test]
    fn idempotent() {
        let cases: &[&[&str]] = &[
            &["", "a", "b", "."],
            &["a", "..", ".."],
            &["", "", "..", "x", ""],
            &[".", "", "", "b", ".."],
            &["", "a", "", "", "b", "."],
        ];
        for &case in cases {
            let once = normalize(case);
            assert_eq!(remove_dot_segments(&once), once);
        }
    }
}
