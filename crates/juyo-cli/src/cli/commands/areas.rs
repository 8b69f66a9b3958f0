//! `juyo areas` – list supported areas.

use juyo_core::Area;

pub fn run_areas() {
    println!("{:<10} {:<28} {}", "AREA", "DELIVERY", "BASE URL");
    for area in Area::ALL {
        let spec = area.spec();
        println!(
            "{:<10} {:<28} {}",
            area.key(),
            spec.delivery.label(),
            spec.base_url
        );
    }
}
