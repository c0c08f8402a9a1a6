//! # FrostSize CLI Application
//!
//! Terminal-based front-end for refrigeration load sizing.
//!
//! ## Status
//!
//! This is a simple prompt-driven demo for one cold room. Project-file
//! management lives in calc_core; a fuller interface comes after the
//! engine API settles.

use std::io::{self, BufRead, Write};

use calc_core::calculations::calculate_cold_room;
use calc_core::inputs::{AncillaryLoadProfile, DoorSpec, ProductThermalProfile, RoomGeometry, SurfaceSpec};
use calc_core::materials::InsulationMaterial;
use calc_core::units::{LengthUnit, MassUnit, TemperatureUnit};

fn prompt_f64(prompt: &str, default: f64) -> f64 {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return default;
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return default;
    }

    input.trim().parse().unwrap_or(default)
}

fn main() {
    println!("FrostSize CLI - Refrigeration Load Sizing");
    println!("=========================================");
    println!();

    let length_m = prompt_f64("Room length (m) [6.0]: ", 6.0);
    let width_m = prompt_f64("Room width (m) [4.0]: ", 4.0);
    let height_m = prompt_f64("Room height (m) [3.0]: ", 3.0);
    let ambient_c = prompt_f64("Ambient temperature (C) [45.0]: ", 45.0);
    let room_c = prompt_f64("Room temperature (C) [2.0]: ", 2.0);
    let mass_kg = prompt_f64("Product throughput (kg/day) [4000.0]: ", 4000.0);
    let entering_c = prompt_f64("Product entering temperature (C) [25.0]: ", 25.0);

    println!();
    println!("Sizing cold room with 100 mm PUF panels...");
    println!();

    let geometry = RoomGeometry {
        length: length_m,
        width: width_m,
        height: height_m,
        dimension_unit: LengthUnit::Meters,
        insulation: InsulationMaterial::Puf,
        wall: SurfaceSpec::new(100.0, 24.0),
        ceiling: SurfaceSpec::new(100.0, 24.0),
        floor: SurfaceSpec::new(80.0, 24.0),
        ambient_temp: ambient_c,
        room_temp: room_c,
        temperature_unit: TemperatureUnit::Celsius,
    };

    let product = ProductThermalProfile {
        mass: mass_kg,
        mass_unit: MassUnit::Kilograms,
        entering_temp: entering_c,
        final_temp: room_c,
        freezing_point: -1.7,
        temperature_unit: TemperatureUnit::Celsius,
        cp_above_freezing: 4.1,
        cp_below_freezing: 2.1,
        latent_heat_kj_per_kg: 233.0,
        pull_down_hours: 24.0,
        batch_hours: 24.0,
        respiration_watts: 0.0,
    };

    // One standard door with its frame heater running during shift hours
    let ancillary = AncillaryLoadProfile {
        door: DoorSpec {
            width: 900.0,
            height: 2000.0,
            unit: LengthUnit::Millimeters,
            quantity: 1.0,
            usage_hours: 8.0,
        },
        ..AncillaryLoadProfile::default()
    };

    match calculate_cold_room(&geometry, &product, &ancillary) {
        Ok(result) => {
            println!("═══════════════════════════════════════");
            println!("  COLD ROOM SIZING RESULTS");
            println!("═══════════════════════════════════════");
            println!();
            println!("Input:");
            println!("  Room:     {:.1} x {:.1} x {:.1} m", length_m, width_m, height_m);
            println!("  Ambient:  {:.1} C / Room: {:.1} C", ambient_c, room_c);
            println!("  Product:  {:.0} kg/day entering at {:.1} C", mass_kg, entering_c);
            println!();
            println!("Load Breakdown (kJ/24h):");
            println!("  Transmission: {:>12.0}", result.transmission_load_kj);
            println!("  Product:      {:>12.0}", result.product_load_kj);
            println!("  Ancillary:    {:>12.0}", result.ancillary_load_kj);
            println!("  Total:        {:>12.0}", result.total_load_kj);
            println!();
            println!("Sizing:");
            println!("  Average load:     {:.2} kW", result.total_load_kw);
            println!("  Capacity:         {:.2} TR", result.refrigeration_capacity_tr);
            println!(
                "  With safety:      {:.2} TR (+{:.0}%)",
                result.capacity_with_safety_tr, result.safety_factor_percent
            );
            println!("  SHR:              {:.3}", result.sensible_heat_ratio);
            println!("  Airflow:          {:.0} CFM", result.airflow_cfm);
            println!();
            println!("═══════════════════════════════════════");

            println!();
            println!("JSON Output (for LLM/API use):");
            if let Ok(json) = serde_json::to_string_pretty(&result) {
                println!("{}", json);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            if let Ok(json) = serde_json::to_string_pretty(&e) {
                eprintln!();
                eprintln!("Error JSON:");
                eprintln!("{}", json);
            }
        }
    }
}
