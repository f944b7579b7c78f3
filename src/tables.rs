use comfy_table::{Attribute, Cell, CellAlignment, Color, Table, modifiers, presets};
use enumset::EnumSet;

use crate::{
    booking::BookingIntent,
    catalog::{Bike, PickupLocation},
    core::{Quote, RatePlan, Tier},
    quantity::Rupees,
};

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_FULL_CONDENSED)
        .apply_modifier(modifiers::UTF8_ROUND_CORNERS)
        .enforce_styling();
    table
}

fn amount_cell(amount: Option<Rupees>) -> Cell {
    amount.map_or_else(
        || Cell::new("—").add_attribute(Attribute::Dim),
        |amount| Cell::new(amount).set_alignment(CellAlignment::Right),
    )
}

pub fn build_bikes_table(bikes: &[&Bike]) -> Table {
    let mut table = new_table();
    table.set_header(vec![
        "ID", "Name", "CC", "Engine", "Fuel", "Mileage", "Seats", "Status", "Hour", "Day",
        "Week", "Month",
    ]);
    for bike in bikes {
        let mut row = vec![
            Cell::new(&bike.id).add_attribute(Attribute::Dim),
            Cell::new(&bike.name).add_attribute(Attribute::Bold),
            Cell::new(bike.cc).set_alignment(CellAlignment::Right),
            Cell::new(&bike.engine_type),
            Cell::new(&bike.fuel_type),
            Cell::new(&bike.mileage),
            Cell::new(bike.seats).set_alignment(CellAlignment::Right),
            Cell::new(bike.status).fg(bike.status.color()),
        ];
        row.extend(EnumSet::<Tier>::all().iter().map(|tier| amount_cell(bike.rates.get(tier))));
        table.add_row(row);
    }
    table
}

/// Every priced tier of the plan, with the selected one highlighted.
pub fn build_quote_table(plan: &RatePlan, quote: &Quote) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Tier", "Rate", "Units", "Total"]);
    for candidate in plan.candidates(quote.duration) {
        let is_selected = candidate.tier == quote.selection.tier;
        let (color, attribute) =
            if is_selected { (Color::Green, Attribute::Bold) } else { (Color::Reset, Attribute::Dim) };
        table.add_row(vec![
            Cell::new(candidate.tier).fg(color).add_attribute(attribute),
            Cell::new(format!("{}/{}", candidate.rate, candidate.tier.unit()))
                .set_alignment(CellAlignment::Right),
            Cell::new(candidate.duration_label()).set_alignment(CellAlignment::Right),
            Cell::new(candidate.total)
                .set_alignment(CellAlignment::Right)
                .fg(color)
                .add_attribute(attribute),
        ]);
    }
    table
}

pub fn build_leads_table(intents: &[BookingIntent]) -> Table {
    let mut table = new_table();
    table.set_header(vec![
        "Created", "Bike", "Location", "Pickup", "Drop", "Hours", "Price", "Phone",
    ]);
    for intent in intents {
        table.add_row(vec![
            Cell::new(intent.created_at.format("%Y-%m-%d %H:%M")).add_attribute(Attribute::Dim),
            Cell::new(&intent.bike_name).add_attribute(Attribute::Bold),
            Cell::new(&intent.pickup_location).fg(
                if intent.pickup_location == PickupLocation::NOT_SELECTED {
                    Color::DarkYellow
                } else {
                    Color::Reset
                },
            ),
            Cell::new(intent.pickup_at.format("%b %d %H:%M")),
            Cell::new(intent.drop_at.format("%b %d %H:%M")),
            Cell::new(intent.total_hours).set_alignment(CellAlignment::Right),
            Cell::new(intent.total_price).set_alignment(CellAlignment::Right),
            Cell::new(intent.customer_phone.as_deref().unwrap_or_default()),
        ]);
    }
    table
}

pub fn build_locations_table() -> Table {
    let mut table = new_table();
    table.set_header(vec!["ID", "Name", "Address"]);
    for location in PickupLocation::ALL {
        table.add_row(vec![
            Cell::new(location.id()).add_attribute(Attribute::Dim),
            Cell::new(location.name()).add_attribute(Attribute::Bold),
            Cell::new(location.address()),
        ]);
    }
    table
}
