//! `CityMap`: road map of Portuguese cities.
//!
//! Roads are undirected with integer lengths in kilometres. Every city has
//! map coordinates; the heuristic is the straight-line distance between
//! coordinates, rounded to the nearest kilometre.

use treesearch::contract::StateDomain;

use crate::contract::HarnessDomain;

/// A road between two cities, traversed from `from` to `to`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Road {
    pub from: &'static str,
    pub to: &'static str,
    pub length: i64,
}

/// An undirected road network with city coordinates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CityMap {
    roads: Vec<(&'static str, &'static str, i64)>,
    coordinates: Vec<(&'static str, (i64, i64))>,
}

const ROADS: &[(&str, &str, i64)] = &[
    ("Coimbra", "Leiria", 73),
    ("Aveiro", "Agueda", 35),
    ("Porto", "Agueda", 79),
    ("Agueda", "Coimbra", 45),
    ("Viseu", "Agueda", 78),
    ("Aveiro", "Porto", 78),
    ("Aveiro", "Coimbra", 65),
    ("Figueira", "Aveiro", 77),
    ("Braga", "Porto", 57),
    ("Viseu", "Guarda", 75),
    ("Viseu", "Coimbra", 91),
    ("Figueira", "Coimbra", 52),
    ("Leiria", "Castelo Branco", 169),
    ("Figueira", "Leiria", 62),
    ("Leiria", "Santarem", 78),
    ("Santarem", "Lisboa", 82),
    ("Santarem", "Castelo Branco", 160),
    ("Castelo Branco", "Viseu", 174),
    ("Santarem", "Evora", 122),
    ("Lisboa", "Evora", 132),
    ("Evora", "Beja", 105),
    ("Lisboa", "Beja", 178),
    ("Faro", "Beja", 147),
    ("Braga", "Guimaraes", 25),
    ("Porto", "Guimaraes", 44),
    ("Guarda", "Covilha", 46),
    ("Viseu", "Covilha", 57),
    ("Castelo Branco", "Covilha", 62),
    ("Guarda", "Castelo Branco", 96),
    ("Lamego", "Guimaraes", 88),
    ("Lamego", "Viseu", 47),
    ("Lamego", "Guarda", 64),
    ("Portalegre", "Castelo Branco", 64),
    ("Portalegre", "Santarem", 157),
    ("Portalegre", "Evora", 194),
];

const COORDINATES: &[(&str, (i64, i64))] = &[
    ("Aveiro", (41, 215)),
    ("Figueira", (24, 161)),
    ("Coimbra", (60, 167)),
    ("Agueda", (58, 208)),
    ("Viseu", (104, 217)),
    ("Braga", (61, 317)),
    ("Porto", (45, 272)),
    ("Lisboa", (0, 0)),
    ("Santarem", (38, 59)),
    ("Leiria", (28, 115)),
    ("Castelo Branco", (140, 124)),
    ("Guarda", (159, 204)),
    ("Evora", (120, -10)),
    ("Beja", (125, -110)),
    ("Faro", (120, -250)),
    ("Guimaraes", (71, 300)),
    ("Covilha", (130, 175)),
    ("Lamego", (125, 250)),
    ("Portalegre", (130, 45)),
];

impl CityMap {
    /// The built-in map of mainland Portugal.
    #[must_use]
    pub fn portugal() -> Self {
        Self {
            roads: ROADS.to_vec(),
            coordinates: COORDINATES.to_vec(),
        }
    }

    /// All city names, in coordinate-table order.
    #[must_use]
    pub fn cities(&self) -> Vec<&'static str> {
        self.coordinates.iter().map(|(name, _)| *name).collect()
    }

    #[must_use]
    pub fn coordinates(&self, city: &str) -> Option<(i64, i64)> {
        self.coordinates
            .iter()
            .find(|(name, _)| *name == city)
            .map(|(_, xy)| *xy)
    }

    /// Length of the direct road between `a` and `b`, either direction.
    #[must_use]
    pub fn road_length(&self, a: &str, b: &str) -> Option<i64> {
        self.roads
            .iter()
            .find(|(x, y, _)| (*x == a && *y == b) || (*x == b && *y == a))
            .map(|(_, _, length)| *length)
    }

    /// Straight-line distance, rounded. `None` if either city is unknown.
    #[must_use]
    #[allow(
        clippy::cast_precision_loss,
        clippy::cast_possible_truncation,
        clippy::similar_names
    )]
    pub fn straight_line(&self, a: &str, b: &str) -> Option<i64> {
        let (ax, ay) = self.coordinates(a)?;
        let (bx, by) = self.coordinates(b)?;
        let (dx, dy) = (ax - bx, ay - by);
        Some(((dx * dx + dy * dy) as f64).sqrt().round() as i64)
    }
}

impl StateDomain for CityMap {
    type State = &'static str;
    type Action = Road;
    type Goal = &'static str;

    fn actions(&self, state: &&'static str) -> Vec<Road> {
        self.roads
            .iter()
            .filter_map(|&(a, b, length)| {
                if a == *state {
                    Some(Road {
                        from: a,
                        to: b,
                        length,
                    })
                } else if b == *state {
                    Some(Road {
                        from: b,
                        to: a,
                        length,
                    })
                } else {
                    None
                }
            })
            .collect()
    }

    fn result(&self, _state: &&'static str, action: &Road) -> &'static str {
        action.to
    }

    fn cost(&self, _state: &&'static str, action: &Road) -> i64 {
        action.length
    }

    fn heuristic(&self, state: &&'static str, goal: &&'static str) -> i64 {
        self.straight_line(state, goal).unwrap_or(0)
    }

    fn satisfies(&self, state: &&'static str, goal: &&'static str) -> bool {
        state == goal
    }
}

impl HarnessDomain for CityMap {
    #[allow(clippy::unnecessary_literal_bound)]
    fn domain_id(&self) -> &str {
        "cities_portugal"
    }
}
