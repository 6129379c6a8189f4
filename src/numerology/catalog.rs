//! Static interpretation catalog
//!
//! One titled entry per reachable figure. Lookups outside the figure
//! domain fall back to a neutral entry rather than panicking.

use super::reduce::Figure;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// A titled interpretation for one figure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interpretation {
    pub title: &'static str,
    pub text: &'static str,
}

static FALLBACK: Interpretation = Interpretation {
    title: "Unknown",
    text: "No interpretation found for this number.",
};

static CATALOG: Lazy<HashMap<u8, Interpretation>> = Lazy::new(|| {
    HashMap::from([
        (
            1,
            Interpretation {
                title: "The Leader",
                text: "Independent, ambitious, original, and pioneering. \
                       Can be self-centered or aggressive.",
            },
        ),
        (
            2,
            Interpretation {
                title: "The Peacemaker",
                text: "Diplomatic, cooperative, sensitive, and intuitive. \
                       Can be shy or indecisive.",
            },
        ),
        (
            3,
            Interpretation {
                title: "The Communicator",
                text: "Creative, expressive, optimistic, and social. \
                       Can be superficial or scattered.",
            },
        ),
        (
            4,
            Interpretation {
                title: "The Builder",
                text: "Practical, disciplined, stable, and hardworking. \
                       Can be rigid or stubborn.",
            },
        ),
        (
            5,
            Interpretation {
                title: "The Adventurer",
                text: "Versatile, freedom-loving, adaptable, and restless. \
                       Can be irresponsible or impulsive.",
            },
        ),
        (
            6,
            Interpretation {
                title: "The Nurturer",
                text: "Responsible, loving, compassionate, and family-oriented. \
                       Can be self-righteous or meddling.",
            },
        ),
        (
            7,
            Interpretation {
                title: "The Seeker",
                text: "Analytical, spiritual, introspective, and wise. \
                       Can be reclusive or cynical.",
            },
        ),
        (
            8,
            Interpretation {
                title: "The Executive",
                text: "Ambitious, powerful, organized, and successful. \
                       Can be materialistic or controlling.",
            },
        ),
        (
            9,
            Interpretation {
                title: "The Humanitarian",
                text: "Compassionate, generous, idealistic, and wise. \
                       Can be self-sacrificing or emotionally detached.",
            },
        ),
        (
            11,
            Interpretation {
                title: "The Master Intuitor",
                text: "Highly intuitive, inspiring, and charismatic. \
                       Can be overly sensitive or impractical.",
            },
        ),
        (
            22,
            Interpretation {
                title: "The Master Builder",
                text: "Visionary, practical, powerful, and capable of grand \
                       achievements. Can be overwhelming or self-destructive.",
            },
        ),
        (
            33,
            Interpretation {
                title: "The Master Teacher",
                text: "Highly compassionate, spiritual, and dedicated to service. \
                       Can be overly responsible or martyrdom-prone.",
            },
        ),
    ])
});

/// Look up the catalog entry for a figure
pub fn interpretation(figure: Figure) -> &'static Interpretation {
    CATALOG.get(&figure.value()).unwrap_or(&FALLBACK)
}
