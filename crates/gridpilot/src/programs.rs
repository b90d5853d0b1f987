#![forbid(unsafe_code)]

//! Bundled example programs for "Load Random Example".

/// Named grid programs, one row per line.
pub const EXAMPLES: &[(&str, &str)] = &[
    (
        "hello",
        "\
#.HELLO.PILOT.#..
.................
*................
;C4q.............
=kick............
*................",
    ),
    (
        "pulse",
        "\
#.PULSE.#........
.................
.D4.......D8.....
..;C4q.....;E4q..
.................",
    ),
    (
        "drums",
        "\
#.DRUMS.#........
.................
.D2......D3......
..=kick...=snare.
.................",
    ),
    (
        "arp",
        "\
#.ARP.#..........
.................
.D2..4C4.........
..;Cq..T.CEGb....
.................",
    ),
];

/// Index of the example called `name`, ignoring case.
#[must_use]
pub fn find(name: &str) -> Option<usize> {
    EXAMPLES
        .iter()
        .position(|(n, _)| n.eq_ignore_ascii_case(name.trim()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridpilot_core::GlyphBuffer;

    #[test]
    fn names_are_unique() {
        for (i, (name, _)) in EXAMPLES.iter().enumerate() {
            assert_eq!(find(name), Some(i));
        }
    }

    #[test]
    fn find_ignores_case() {
        assert_eq!(find(" PULSE "), Some(1));
        assert_eq!(find("missing"), None);
    }

    #[test]
    fn programs_are_rectangular() {
        for (name, program) in EXAMPLES {
            let grid = GlyphBuffer::from_text(program);
            assert_eq!(grid.rows().join("\n"), *program, "{name}");
        }
    }
}
