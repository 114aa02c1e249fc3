//! Published capacity and length for the MSC fleet.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipSpecs {
    /// Guests at double occupancy.
    pub capacity: u32,
    pub length_ft: u32,
}

const FLEET: &[(&str, u32, u32)] = &[
    ("MSC Grandiosa", 6334, 1087),
    ("MSC Magnifica", 3223, 963),
    ("MSC Musica", 2550, 964),
    ("MSC Orchestra", 3223, 964),
    ("MSC Poesia", 3223, 964),
    ("MSC Fantasia", 4363, 1093),
    ("MSC Splendida", 4363, 1093),
    ("MSC Divina", 4345, 1093),
    ("MSC Preziosa", 4345, 1093),
    ("MSC Meraviglia", 4500, 1036),
    ("MSC Bellissima", 4500, 1036),
    ("MSC Seaside", 5179, 1060),
    ("MSC Seaview", 5179, 1060),
    ("MSC Seashore", 5632, 1112),
    ("MSC Seascape", 5877, 1112),
    ("MSC Virtuosa", 6334, 1087),
    ("MSC Euribia", 6334, 1087),
    ("MSC World Europa", 6774, 1112),
    ("MSC World America", 6774, 1112),
    ("MSC Armonia", 2679, 902),
    ("MSC Sinfonia", 2199, 902),
    ("MSC Lirica", 2199, 902),
    ("MSC Opera", 2679, 902),
];

/// Exact, case-sensitive name match.
pub fn ship_specs(name: &str) -> Option<ShipSpecs> {
    FLEET
        .iter()
        .find(|(n, _, _)| *n == name)
        .map(|&(_, capacity, length_ft)| ShipSpecs {
            capacity,
            length_ft,
        })
}

/// `"MSC Grandiosa (6334 guests, 1087ft)"`, or the bare name when unknown.
pub fn display_name(name: &str) -> String {
    match ship_specs(name) {
        Some(s) => format!("{name} ({} guests, {}ft)", s.capacity, s.length_ft),
        None => name.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_ship() {
        assert_eq!(
            ship_specs("MSC World Europa"),
            Some(ShipSpecs {
                capacity: 6774,
                length_ft: 1112
            })
        );
        assert_eq!(display_name("MSC Musica"), "MSC Musica (2550 guests, 964ft)");
    }

    #[test]
    fn unknown_or_miscased_ship() {
        assert_eq!(ship_specs("msc musica"), None);
        assert_eq!(display_name("Queen Mary 2"), "Queen Mary 2");
        assert_eq!(FLEET.len(), 23);
    }
}
