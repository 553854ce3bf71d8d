//! Default guest list used by the demo binary.

use crate::core::Guest;

/// The twelve guests of the demo cafe, in arrival order.
pub const DEFAULT_GUESTS: [&str; 12] = [
    "Maria",
    "Oleg",
    "Vakhtang",
    "Sergey",
    "Darya",
    "Arman",
    "Vitoria",
    "Nikita",
    "Galina",
    "Pavel",
    "Ilya",
    "Alexandra",
];

/// Build not-yet-started guests from names, preserving order.
pub fn guests_from<I, N>(names: I) -> Vec<Guest>
where
    I: IntoIterator<Item = N>,
    N: Into<String>,
{
    names.into_iter().map(Guest::new).collect()
}
