//! Solar System - Binary Entry Point
//!
//! Builds the eight planets, sorts them by every named rule, and prints
//! each ordering as a text table. Set `RUST_LOG=solar_system=debug` to
//! see the list operations as they happen.

use solar_system::types::measure::from_fixed_trimmed;
use solar_system::{Planet, SolarSystem, SortKey};

/// (name, distance AU, day length hours, moons)
const PLANETS: [(&str, &str, &str, u32); 8] = [
    ("Mercury", "0.387", "4222.6", 0),
    ("Venus", "0.723", "2802.0", 0),
    ("Earth", "1.0", "24.0", 1),
    ("Mars", "1.524", "24.7", 2),
    ("Jupiter", "5.203", "9.9", 95),
    ("Saturn", "9.537", "10.7", 146),
    ("Uranus", "19.191", "17.2", 28),
    ("Neptune", "30.069", "16.1", 16),
];

fn render(title: &str, system: &SolarSystem) {
    println!("{title}");
    println!("  {:<10} {:>14} {:>16} {:>16}", "Name", "Distance (AU)", "Day Length (hr)", "Number of Moons");
    for planet in system {
        println!(
            "  {:<10} {:>14} {:>16} {:>16}",
            planet.name(),
            from_fixed_trimmed(planet.distance()),
            from_fixed_trimmed(planet.day_length()),
            planet.moons(),
        );
    }
    println!("  state root: {}", system.state_root_hex());
    println!();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "solar_system=info".into()),
        )
        .init();

    let mut system = SolarSystem::with_capacity(PLANETS.len());
    for (name, distance, day_length, moons) in PLANETS {
        system.add(Planet::parse(name, distance, day_length, moons)?);
    }
    tracing::info!(planets = system.len(), "solar system built");

    render("Insertion order", &system);

    for key in SortKey::ALL {
        let report = system.sort_with(key);
        tracing::info!(
            %key,
            passes = report.passes,
            exchanges = report.exchanges,
            "sorted"
        );
        render(&format!("Sorted by {key}"), &system);
    }

    let pluto = Planet::parse("Pluto", "39.48", "153.3", 5)?;
    system.add(pluto.clone());
    system.sort_by_distance();
    render("With Pluto", &system);

    system.remove(&pluto);
    system.validate()?;
    render("Without Pluto", &system);

    Ok(())
}
