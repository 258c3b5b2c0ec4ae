use super::tables::{
    ApartmentType, SizeClass, BASE_PRICES, BUILDING_COEFFICIENTS, ELEVATOR_COEFFICIENTS,
    FLOOR_COEFFICIENTS, GEOMETRY_COEFFICIENTS, LAYOUT_COEFFICIENTS, PARKING_PRICES,
    POSITION_COEFFICIENTS, SIZE_COEFFICIENTS, SIZE_RANGES, UNITS_ON_FLOOR_COEFFICIENTS,
    VIEW_COEFFICIENTS,
};
use serde::Serialize;

/// Valid values for every categorical input, in sheet order. Drives the
/// calculator's drop-downs; the engines do not enforce membership beyond the
/// table lookups themselves.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DropdownOptions {
    pub apartment_types: Vec<&'static str>,
    pub floors: Vec<u32>,
    pub sizes: Vec<&'static str>,
    pub size_ranges: Vec<SizeRangeRow>,
    pub layouts: Vec<&'static str>,
    pub geometries: Vec<&'static str>,
    pub elevator_zones: Vec<&'static str>,
    pub views: Vec<&'static str>,
    pub positions: Vec<&'static str>,
    pub units_on_floor: Vec<u32>,
    pub buildings: Vec<&'static str>,
    pub parking_types: Vec<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SizeRangeRow {
    pub apartment_type: &'static str,
    pub ranges: Vec<SizeRange>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SizeRange {
    pub size: &'static str,
    pub range: &'static str,
}

pub fn list_dropdown_options() -> DropdownOptions {
    let mut floors: Vec<u32> = FLOOR_COEFFICIENTS.keys().copied().collect();
    floors.sort_unstable();

    DropdownOptions {
        apartment_types: BASE_PRICES.keys().map(|kind| kind.label()).collect(),
        floors,
        sizes: SIZE_COEFFICIENTS.keys().map(|size| size.label()).collect(),
        size_ranges: SIZE_RANGES
            .iter()
            .map(|(kind, ranges)| size_range_row(*kind, ranges))
            .collect(),
        layouts: LAYOUT_COEFFICIENTS.keys().map(|layout| layout.label()).collect(),
        geometries: GEOMETRY_COEFFICIENTS
            .keys()
            .map(|geometry| geometry.label())
            .collect(),
        elevator_zones: ELEVATOR_COEFFICIENTS.keys().map(|zone| zone.label()).collect(),
        views: VIEW_COEFFICIENTS.keys().copied().collect(),
        positions: POSITION_COEFFICIENTS.keys().copied().collect(),
        units_on_floor: UNITS_ON_FLOOR_COEFFICIENTS.keys().copied().collect(),
        buildings: BUILDING_COEFFICIENTS.keys().copied().collect(),
        parking_types: PARKING_PRICES.keys().map(|kind| kind.label()).collect(),
    }
}

fn size_range_row(
    apartment_type: ApartmentType,
    ranges: &[(SizeClass, &'static str)],
) -> SizeRangeRow {
    SizeRangeRow {
        apartment_type: apartment_type.label(),
        ranges: ranges
            .iter()
            .map(|&(size, range)| SizeRange {
                size: size.label(),
                range,
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn options_cover_every_table() {
        let options = list_dropdown_options();

        assert_eq!(options.apartment_types, ["Ст", "1К", "2К"]);
        assert_eq!(options.floors, (1..=12).collect::<Vec<u32>>());
        assert_eq!(options.sizes, ["XS", "S", "M", "L", "XL"]);
        assert_eq!(options.layouts, ["Угловая", "Линейная"]);
        assert_eq!(options.geometries, ["Правильная", "Неправильная"]);
        assert_eq!(options.elevator_zones, ["Зона 1", "Зона 2", "Зона 3"]);
        assert_eq!(options.views.len(), 14);
        assert_eq!(options.views[0], "Море");
        assert_eq!(options.positions.len(), 6);
        assert_eq!(
            options.units_on_floor,
            [11, 12, 13, 14, 26, 33, 34, 37, 38, 39, 40, 41, 42]
        );
        assert_eq!(options.buildings, ["С1", "С2", "С3-1", "С3-2"]);
        assert_eq!(options.parking_types.len(), 5);
    }

    #[test]
    fn size_ranges_follow_apartment_types() {
        let options = list_dropdown_options();
        let one_room = options
            .size_ranges
            .iter()
            .find(|row| row.apartment_type == "1К")
            .expect("1К ranges present");

        assert_eq!(one_room.ranges.len(), 5);
        assert_eq!(one_room.ranges[0].size, "XS");
        assert_eq!(one_room.ranges[0].range, "<40");

        let two_room = options
            .size_ranges
            .iter()
            .find(|row| row.apartment_type == "2К")
            .expect("2К ranges present");
        assert_eq!(two_room.ranges.len(), 1);
    }
}
