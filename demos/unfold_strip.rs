//! Example unfolding a few strips and printing their panels over time
//!
//! Run with `RUST_LOG=debug` to see the per-panel schedule.
//! An optional first argument names a TOML config file.

use cgmath::{Matrix4, Rad, Vector3};
use unfold_engine::{
    engine::{add_strips, animation_end_time, create_animation, sample_frame},
    geometry::{quad_center, quad_normal},
    load_config_file,
    renderer::{build_frame_vertices, quad_indices},
    PanelState, StripDescriptor, UnfoldConfig,
};

fn main() -> anyhow::Result<()> {
    // Initialize logging
    env_logger::init();

    let config = match std::env::args().nth(1) {
        Some(path) => load_config_file(path)?,
        None => UnfoldConfig::default(),
    };

    println!("Unfolding Strips Example");
    println!("========================");

    let mut engine = create_animation(config)?;

    let strips = vec![
        StripDescriptor {
            label: "spine".to_string(),
            grammar: "D0b1D0{A1{c2}}B1".to_string(),
            material_id: 0,
            ..Default::default()
        },
        StripDescriptor {
            label: "wing".to_string(),
            grammar: "A1 {b0 d0} C1 {B2} a1".to_string(),
            transform: Matrix4::from_angle_y(Rad(std::f32::consts::FRAC_PI_4)),
            offset: Vector3::new(4.0, 0.0, 0.0),
            start_time: 0.5,
            material_id: 1,
            ..Default::default()
        },
        StripDescriptor {
            label: "broken".to_string(),
            grammar: "A0Q1".to_string(),
            ..Default::default()
        },
    ];

    for (desc, result) in strips.iter().zip(add_strips(&mut engine, &strips)) {
        match result {
            Ok(id) => println!("  built '{}' as {:?}", desc.label, id),
            Err(e) => println!("  skipped '{}': {}", desc.label, e),
        }
    }

    let end = animation_end_time(&engine);
    println!("\nAnimation settles at {:.3}s\n", end);

    let steps = 8;
    for step in 0..=steps {
        let t = end * step as f32 / steps as f32;
        let frame = sample_frame(&engine, t);

        let unfolding = frame
            .iter()
            .filter(|s| matches!(s.panel.state, PanelState::Unfolding { .. }))
            .count();
        let vertices = build_frame_vertices(&frame);
        let indices = quad_indices(vertices.len() / 4);

        println!(
            "t={:.3}s  panels={} unfolding={} vertices={} indices={}",
            t,
            frame.len(),
            unfolding,
            vertices.len(),
            indices.len()
        );
    }

    println!("\nRest poses of the last panel per strip:");
    for strip in &engine.strips {
        if let Some(tip) = strip.panels.last() {
            let center = quad_center(&tip.rest_geometry);
            let normal = quad_normal(&tip.rest_geometry);
            println!(
                "  {:<6} center=({:.2}, {:.2}, {:.2}) normal=({:.2}, {:.2}, {:.2})",
                strip.label, center.x, center.y, center.z, normal.x, normal.y, normal.z
            );
        }
    }

    Ok(())
}
