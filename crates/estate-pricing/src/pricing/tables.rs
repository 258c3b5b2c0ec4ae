//! Coefficient and price tables taken from the pricing sheet of the first
//! construction phase.

use crate::error::CalculationError;
use std::fmt;

/// Adjustment contributed by an attribute value that no table knows about.
pub const NEUTRAL_COEFFICIENT: f64 = 0.0;

/// Share of the summer area (balconies, terraces) counted as living space.
pub const SUMMER_AREA_FACTOR: f64 = 0.3;

pub const STORAGE_PRICE_PER_SQM: f64 = 250_000.0;
pub const STORAGE_DISCOUNT: f64 = 0.05;
pub const PARKING_DISCOUNT: f64 = 0.05;

/// Margin added on top of the final price so the sales team can grant the
/// maximum discount and still land on the list price.
pub const MAX_APARTMENT_DISCOUNT: f64 = 0.10;

/// Flat amount per square meter added to the CRM price for the public site.
pub const BOOKING_FEE: f64 = 6_000.0;

/// Immutable lookup table over a small, ordered set of keys.
///
/// Keys keep the order of the source sheet so option lists can be rendered
/// straight from the table.
#[derive(Debug)]
pub struct Table<K: 'static, V: 'static> {
    name: &'static str,
    entries: &'static [(K, V)],
}

impl<K: 'static, V: Copy + 'static> Table<K, V> {
    pub const fn new(name: &'static str, entries: &'static [(K, V)]) -> Self {
        Self { name, entries }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn get<Q>(&self, key: &Q) -> Option<V>
    where
        K: PartialEq<Q>,
        Q: ?Sized,
    {
        self.entries
            .iter()
            .find(|(candidate, _)| candidate == key)
            .map(|(_, value)| *value)
    }

    pub fn keys(&self) -> impl Iterator<Item = &'static K> {
        self.entries.iter().map(|(key, _)| key)
    }

    /// Lookup for identifiers that must be priced; a miss is a caller error.
    pub fn lookup_required<Q>(&self, key: &Q) -> Result<V, CalculationError>
    where
        K: PartialEq<Q>,
        Q: fmt::Display + ?Sized,
    {
        self.get(key)
            .ok_or_else(|| CalculationError::UnknownCategory {
                table: self.name,
                key: key.to_string(),
            })
    }
}

impl<K: 'static> Table<K, f64> {
    /// Lookup for attributes that only nudge a price; a miss adds nothing.
    pub fn lookup_with_default<Q>(&self, key: &Q) -> f64
    where
        K: PartialEq<Q>,
        Q: ?Sized,
    {
        self.get(key).unwrap_or(NEUTRAL_COEFFICIENT)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApartmentType {
    Studio,
    OneRoom,
    TwoRoom,
}

impl ApartmentType {
    pub const fn ordered() -> [Self; 3] {
        [Self::Studio, Self::OneRoom, Self::TwoRoom]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Studio => "Ст",
            Self::OneRoom => "1К",
            Self::TwoRoom => "2К",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SizeClass {
    ExtraSmall,
    Small,
    Medium,
    Large,
    ExtraLarge,
}

impl SizeClass {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::ExtraSmall,
            Self::Small,
            Self::Medium,
            Self::Large,
            Self::ExtraLarge,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::ExtraSmall => "XS",
            Self::Small => "S",
            Self::Medium => "M",
            Self::Large => "L",
            Self::ExtraLarge => "XL",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Layout {
    Corner,
    Linear,
}

impl Layout {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Corner => "Угловая",
            Self::Linear => "Линейная",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Geometry {
    Regular,
    Irregular,
}

impl Geometry {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Regular => "Правильная",
            Self::Irregular => "Неправильная",
        }
    }
}

/// Walking distance band from the elevator hall.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElevatorZone {
    Near,
    Middle,
    Far,
}

impl ElevatorZone {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Near => "Зона 1",
            Self::Middle => "Зона 2",
            Self::Far => "Зона 3",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParkingType {
    Standard,
    Vip,
    Accessible,
    ElectricVehicle,
    Wide,
}

impl ParkingType {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Standard => "Стандартное место",
            Self::Vip => "VIP место",
            Self::Accessible => "Место для МГН М4",
            Self::ElectricVehicle => "Место для электромобилей",
            Self::Wide => "Расширенное место",
        }
    }
}

// Request payloads carry labels, so every closed domain compares against the
// label it is published under.
impl<'a> PartialEq<&'a str> for ApartmentType {
    fn eq(&self, other: &&'a str) -> bool {
        self.label() == *other
    }
}

impl<'a> PartialEq<&'a str> for SizeClass {
    fn eq(&self, other: &&'a str) -> bool {
        self.label() == *other
    }
}

impl<'a> PartialEq<&'a str> for Layout {
    fn eq(&self, other: &&'a str) -> bool {
        self.label() == *other
    }
}

impl<'a> PartialEq<&'a str> for Geometry {
    fn eq(&self, other: &&'a str) -> bool {
        self.label() == *other
    }
}

impl<'a> PartialEq<&'a str> for ElevatorZone {
    fn eq(&self, other: &&'a str) -> bool {
        self.label() == *other
    }
}

impl<'a> PartialEq<&'a str> for ParkingType {
    fn eq(&self, other: &&'a str) -> bool {
        self.label() == *other
    }
}

/// Base price per square meter; `1К` and `2К` are 327 000 discounted by 4 % and 6 %.
pub static BASE_PRICES: Table<ApartmentType, f64> = Table::new(
    "apartment type",
    &[
        (ApartmentType::Studio, 327_000.0),
        (ApartmentType::OneRoom, 313_920.0),
        (ApartmentType::TwoRoom, 307_380.0),
    ],
);

pub static FLOOR_COEFFICIENTS: Table<u32, f64> = Table::new(
    "floor",
    &[
        (12, 0.215),
        (11, 0.16),
        (10, 0.12),
        (9, 0.085),
        (8, 0.055),
        (7, 0.03),
        (6, 0.015),
        (5, 0.005),
        (4, 0.0),
        (3, -0.005),
        (2, -0.015),
        (1, -0.045),
    ],
);

pub static SIZE_COEFFICIENTS: Table<SizeClass, f64> = Table::new(
    "size",
    &[
        (SizeClass::ExtraSmall, 0.06),
        (SizeClass::Small, 0.04),
        (SizeClass::Medium, 0.0),
        (SizeClass::Large, -0.01),
        (SizeClass::ExtraLarge, -0.02),
    ],
);

pub static LAYOUT_COEFFICIENTS: Table<Layout, f64> = Table::new(
    "layout",
    &[(Layout::Corner, 0.03), (Layout::Linear, 0.0)],
);

pub static GEOMETRY_COEFFICIENTS: Table<Geometry, f64> = Table::new(
    "geometry",
    &[(Geometry::Regular, 0.03), (Geometry::Irregular, 0.0)],
);

pub static ELEVATOR_COEFFICIENTS: Table<ElevatorZone, f64> = Table::new(
    "elevator zone",
    &[
        (ElevatorZone::Near, 0.005),
        (ElevatorZone::Middle, 0.0),
        (ElevatorZone::Far, -0.005),
    ],
);

pub static VIEW_COEFFICIENTS: Table<&'static str, f64> = Table::new(
    "view",
    &[
        ("Море", 0.07),
        ("Двор+море", 0.05),
        ("Озеро", 0.03),
        ("Двор юго-запад", 0.02),
        ("Двор+озеро", 0.015),
        ("Двор юго-восток", 0.01),
        ("Двор юг", 0.0),
        ("Двор северо-восток", -0.01),
        ("Двор север", -0.015),
        ("Въездная зона северо-восток", -0.02),
        ("Коммерция", -0.02),
        ("Въездная зона север", -0.02),
        ("Улица северо-восток", -0.02),
        ("Улица север", -0.02),
    ],
);

pub static POSITION_COEFFICIENTS: Table<&'static str, f64> = Table::new(
    "position",
    &[
        ("Стандарт", 0.0),
        ("Около/над входной группой", -0.01),
        ("Над входом в коммерцию", -0.02),
        ("У входа в лифтовый холл", -0.01),
        ("Окна на кровлю", -0.005),
        ("Внутренний угол", -0.01),
    ],
);

pub static UNITS_ON_FLOOR_COEFFICIENTS: Table<u32, f64> = Table::new(
    "units on floor",
    &[
        (11, 0.015),
        (12, 0.014),
        (13, 0.013),
        (14, 0.012),
        (26, 0.0),
        (33, -0.007),
        (34, -0.008),
        (37, -0.011),
        (38, -0.012),
        (39, -0.013),
        (40, -0.014),
        (41, -0.015),
        (42, -0.016),
    ],
);

pub static BUILDING_COEFFICIENTS: Table<&'static str, f64> = Table::new(
    "building",
    &[("С1", 0.0), ("С2", 0.12), ("С3-1", 0.0), ("С3-2", 0.0)],
);

pub static PARKING_PRICES: Table<ParkingType, f64> = Table::new(
    "parking type",
    &[
        (ParkingType::Standard, 1_500_000.0),
        (ParkingType::Vip, 1_800_000.0),
        (ParkingType::Accessible, 1_700_000.0),
        (ParkingType::ElectricVehicle, 2_000_000.0),
        (ParkingType::Wide, 2_000_000.0),
    ],
);

/// Area bands behind each size class, per apartment type. Reference data for
/// the option lists; pricing never reads it.
pub static SIZE_RANGES: &[(ApartmentType, &[(SizeClass, &str)])] = &[
    (
        ApartmentType::Studio,
        &[
            (SizeClass::Small, "<30"),
            (SizeClass::Medium, "30-34"),
            (SizeClass::Large, "35-40"),
            (SizeClass::ExtraLarge, ">40"),
        ],
    ),
    (
        ApartmentType::OneRoom,
        &[
            (SizeClass::ExtraSmall, "<40"),
            (SizeClass::Small, "40-45"),
            (SizeClass::Medium, "45-50"),
            (SizeClass::Large, "50-55"),
            (SizeClass::ExtraLarge, ">55"),
        ],
    ),
    (ApartmentType::TwoRoom, &[(SizeClass::ExtraLarge, ">70")]),
];
