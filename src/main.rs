//! Oceanwave - frame-stepped Gerstner ocean driver
//!
//! Runs the per-frame loop a renderer would: one clock tick, one wave upload,
//! camera submersion and floating object placement against the same time.

use anyhow::Context;
use clap::Parser;

use oceanwave::camera::CameraSystem;
use oceanwave::cli::Args;
use oceanwave::floating::FloatingObject;
use oceanwave::gpu::{headless_device, SurfaceBuffers};
use oceanwave::ocean::{OceanSystem, SimulationClock, SurfaceQuery};
use oceanwave::params::{FloatingParams, RenderConfig};

/// Headless GPU state when `--gpu` is set
struct GpuState {
    device: wgpu::Device,
    queue: wgpu::Queue,
    buffers: SurfaceBuffers,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let render_config = RenderConfig::default();

    let mut ocean = OceanSystem::new(&args.wave_generation(), args.mesh_config())
        .context("invalid ocean configuration")?;
    for edit in &args.edits {
        ocean
            .set_wave_parameter(edit.index, edit.property, edit.value)
            .with_context(|| format!("cannot apply wave edit {:?}", edit))?;
    }

    let mesh = ocean.mesh();
    log::info!(
        "Surface mesh: {} quads per side, {} vertices, {} primitives",
        mesh.config().quads_per_side(),
        mesh.vertices.len(),
        mesh.primitive_count()
    );

    let camera = CameraSystem::new(args.parse_camera_preset());
    let mut floats: Vec<FloatingObject> = args
        .floats
        .iter()
        .map(|&anchor| FloatingObject::new(anchor, FloatingParams::default()))
        .collect();

    let mut clock = SimulationClock::new();
    let mut gpu = if args.gpu {
        let (device, queue) =
            pollster::block_on(headless_device()).context("GPU upload requested")?;
        let buffers = SurfaceBuffers::new(&device, &ocean, clock.now());
        Some(GpuState {
            device,
            queue,
            buffers,
        })
    } else {
        None
    };

    let mut underwater_frames = 0;
    for frame in 0..args.frames {
        let time_s = clock.now();

        if let Some(state) = gpu.as_mut() {
            state
                .buffers
                .sync(&state.device, &state.queue, &ocean, time_s);
        }

        let camera_frame = camera.frame(time_s, &render_config, &ocean);
        if camera_frame.underwater {
            underwater_frames += 1;
        }

        for (i, object) in floats.iter_mut().enumerate() {
            let model = object.update(&ocean, time_s, args.dt);
            log::debug!(
                "frame {} float {}: origin {:?} tilt {:?}",
                frame,
                i,
                model.w_axis.truncate(),
                object.tilt()
            );
        }

        log::debug!(
            "frame {} t={:.3}s eye {:?} underwater {}",
            frame,
            time_s,
            camera_frame.eye,
            camera_frame.underwater
        );
        clock.advance(args.dt);
    }

    let end = clock.now();
    for object in &floats {
        let surface = ocean.surface_at(object.anchor, end);
        println!(
            "float at ({:.2}, {:.2}): surface y {:.3}, normal ({:.3}, {:.3}, {:.3})",
            object.anchor.x,
            object.anchor.z,
            surface.position.y,
            surface.normal.x,
            surface.normal.y,
            surface.normal.z
        );
    }
    println!(
        "{} frames over {:.2}s, camera underwater for {} frames",
        args.frames, end, underwater_frames
    );
    Ok(())
}
