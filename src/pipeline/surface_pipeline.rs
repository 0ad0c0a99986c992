use anyhow::Context;
use log::{debug, error, info, trace};
use nalgebra::{convert, Matrix4};

use crate::{
    animation::{FrameClock, RippleWaveform, SurfaceAnimator, Waveform},
    camera::CameraController,
    grid::{ControlGrid, GridError},
    misc::FloatingPoint,
    patch::PATCH_VERTEX_COUNT,
    pipeline::{Command, FrameHost, InputEvent, PipelineOptions},
    render::{viewport_matrix, FrameUniforms, RenderBridge, RenderSettings},
    surface::SurfaceState,
};

/// Owned context of the animated surface pipeline
///
/// Holds every piece of per-frame state, a frame mutates it in a fixed order:
/// input, camera, animation, derivatives, packing, upload, draw, present.
#[derive(Clone, Debug)]
pub struct SurfacePipeline<T: FloatingPoint, W = RippleWaveform<T>> {
    surface: SurfaceState<T>,
    animator: SurfaceAnimator<T, W>,
    camera: CameraController<T>,
    settings: RenderSettings<T>,
    clock: FrameClock<T>,
}

impl<T: FloatingPoint> SurfacePipeline<T> {
    /// Build a pipeline from options, loading the grid source when one is given
    pub fn try_from_options(options: PipelineOptions<T>) -> Result<Self, GridError> {
        let grid = match &options.grid_source {
            Some(path) => ControlGrid::load(path)?,
            None => ControlGrid::create(options.rows, options.cols, options.step)?,
        };
        Ok(Self::new(
            grid,
            SurfaceAnimator::new(options.waveform),
            CameraController::new(options.camera),
            options.render,
        ))
    }
}

impl<T: FloatingPoint, W: Waveform<T>> SurfacePipeline<T, W> {
    pub fn new(
        grid: ControlGrid<T>,
        animator: SurfaceAnimator<T, W>,
        camera: CameraController<T>,
        settings: RenderSettings<T>,
    ) -> Self {
        Self {
            surface: SurfaceState::new(grid),
            animator,
            camera,
            settings,
            clock: FrameClock::new(),
        }
    }

    pub fn surface(&self) -> &SurfaceState<T> {
        &self.surface
    }

    pub fn animator(&self) -> &SurfaceAnimator<T, W> {
        &self.animator
    }

    pub fn camera(&self) -> &CameraController<T> {
        &self.camera
    }

    pub fn camera_mut(&mut self) -> &mut CameraController<T> {
        &mut self.camera
    }

    pub fn settings(&self) -> &RenderSettings<T> {
        &self.settings
    }

    pub fn settings_mut(&mut self) -> &mut RenderSettings<T> {
        &mut self.settings
    }

    pub fn clock(&self) -> &FrameClock<T> {
        &self.clock
    }

    /// Move a single control point vertically, then rederive and repack
    pub fn relocate_point(&mut self, i: usize, j: usize, height: T) -> Result<(), GridError> {
        self.surface.relocate_point(i, j, height)
    }

    pub fn handle_event(&mut self, event: InputEvent<T>) {
        match event {
            InputEvent::Command(command) => self.apply(command),
            InputEvent::PointerPressed => self.camera.press(),
            InputEvent::PointerReleased => self.camera.release(),
            InputEvent::PointerMoved { x, y } => {
                self.camera.pointer_moved(x, y);
            }
        }
    }

    /// Apply a discrete command, each one mutates a single piece of state
    pub fn apply(&mut self, command: Command) {
        debug!("command {:?}", command);
        let options = self.camera.options().clone();
        match command {
            Command::IncreaseTessellation => self.settings.increase_tessellation(),
            Command::DecreaseTessellation => self.settings.decrease_tessellation(),
            Command::MoveForward => {
                self.camera.move_forward(options.move_speed);
            }
            Command::MoveBackward => {
                self.camera.move_forward(-options.move_speed);
            }
            Command::OrbitLeft => self.camera.orbit_yaw(options.orbit_angle),
            Command::OrbitRight => self.camera.orbit_yaw(-options.orbit_angle),
            Command::StrafeUp => {
                self.camera.strafe_vertical(options.strafe_speed);
            }
            Command::StrafeDown => {
                self.camera.strafe_vertical(-options.strafe_speed);
            }
            Command::ToggleCentering => self.settings.toggle_centering(),
            Command::ToggleWireframe => self.settings.toggle_render_mode(),
        }
    }

    /// Model transform of the surface, centering the grid footprint on the origin when enabled
    pub fn model_matrix(&self) -> Matrix4<T> {
        if self.settings.centered {
            Matrix4::new_translation(&-self.surface.grid().center().coords)
        } else {
            Matrix4::identity()
        }
    }

    /// Build the uniforms of the current state for a framebuffer of `size` pixels
    pub fn uniforms(&self, (width, height): (u32, u32)) -> FrameUniforms<T> {
        let aspect: T = convert(f64::from(width.max(1)) / f64::from(height.max(1)));
        FrameUniforms::new(
            self.camera.view_matrix(),
            self.camera.projection_matrix(aspect),
            self.model_matrix(),
            viewport_matrix(width, height),
            self.settings.tessellation_level,
            self.clock.time(),
            self.clock.delta(),
            self.settings.render_mode,
            PATCH_VERTEX_COUNT,
            self.surface.patches().vertex_count(),
        )
    }

    /// Animate the surface at time `t`, upload the repacked patches and draw them
    pub fn frame<B: RenderBridge<T>>(
        &mut self,
        t: T,
        size: (u32, u32),
        bridge: &mut B,
    ) -> anyhow::Result<FrameUniforms<T>> {
        self.clock.tick(t);
        self.animator.update(&mut self.surface, t);

        bridge
            .upload(self.surface.patches())
            .context("failed to upload the patch buffer")?;

        let uniforms = self.uniforms(size);
        bridge
            .draw(&uniforms)
            .context("failed to draw the surface patches")?;

        trace!(
            "frame {} drawn with {} vertices",
            self.clock.frames(),
            uniforms.vertex_count
        );
        Ok(uniforms)
    }

    /// Run the frame loop until the host requests to close, returning the number of frames drawn
    ///
    /// A close request is honored at the start of a frame, a frame in progress always completes.
    pub fn run<H, B>(&mut self, host: &mut H, bridge: &mut B) -> anyhow::Result<u64>
    where
        H: FrameHost<T>,
        B: RenderBridge<T>,
    {
        info!(
            "frame loop started with {}x{} control points",
            self.surface.grid().rows(),
            self.surface.grid().cols()
        );

        let mut frames = 0;
        while !host.close_requested() {
            for event in host.poll_events() {
                self.handle_event(event);
            }

            let t = host.elapsed();
            let size = host.framebuffer_size();
            self.frame(t, size, bridge).inspect_err(|e| {
                error!("frame {} failed: {:#}", frames, e);
            })?;
            bridge
                .present()
                .context("failed to present the frame")
                .inspect_err(|e| error!("frame {} failed: {:#}", frames, e))?;
            frames += 1;
        }

        info!("frame loop stopped after {} frames", frames);
        Ok(frames)
    }
}
