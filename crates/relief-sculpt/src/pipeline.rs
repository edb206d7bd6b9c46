//! End-to-end image → mesh pipeline.
//!
//! Synchronous and I/O free. Progress goes to the caller's observer at
//! fixed milestones; nothing is shared between invocations, so separate
//! runs may execute in parallel.

use std::thread::{self, JoinHandle};

use tracing::{debug, info, warn};

use relief_field::{synthesize, EnhancementPipeline, HeightField, Raster, StageKind};
use relief_io::{validate_settings, Settings};
use relief_mesh::cleanup::remove_degenerate_triangles;
use relief_mesh::normals::attach_vertex_normals;
use relief_mesh::MeshBuffers;
use relief_telemetry::{Milestone, ProgressEvent, ProgressObserver};
use relief_types::{ReliefError, ReliefResult};

use crate::projection::Projector;
use crate::solid;
use crate::surface;

fn emit(observer: &mut dyn ProgressObserver, milestone: Milestone) {
    observer.on_progress(&ProgressEvent::from(milestone));
}

fn stage_milestone(kind: StageKind) -> Milestone {
    match kind {
        StageKind::AnisotropicDiffusion => Milestone::AnisotropicDiffusion,
        StageKind::MultiScale => Milestone::MultiScale,
        StageKind::Bilateral => Milestone::BilateralFilter,
        StageKind::NoiseReduction => Milestone::NoiseReduction,
        StageKind::Smoothing => Milestone::Smoothing,
        StageKind::Gradient => Milestone::GradientEnhancement,
        StageKind::Laplacian => Milestone::LaplacianEnhancement,
        StageKind::UnsharpMask => Milestone::UnsharpMasking,
        StageKind::Depth => Milestone::DepthRescaled,
    }
}

/// Converts `raster` into a triangle mesh.
///
/// Settings are validated before any work starts. The returned mesh has
/// passed [`MeshBuffers::validate`]; on error nothing is returned.
///
/// # Errors
/// - [`ReliefError::Config`] for an out-of-range setting.
/// - [`ReliefError::Decode`] if the raster cannot be sampled.
/// - [`ReliefError::Processing`] if a stage or the final check fails.
pub fn generate_mesh(
    raster: &Raster,
    settings: &Settings,
    observer: &mut dyn ProgressObserver,
) -> ReliefResult<MeshBuffers> {
    validate_settings(settings)?;
    let res = settings.grid_size();
    info!(
        width = raster.width(),
        height = raster.height(),
        resolution = res,
        projection = settings.projection.name(),
        solid = settings.generate_solid,
        "Generating mesh"
    );

    let sampled = raster.resample(res)?;
    emit(observer, Milestone::Sampled);

    let mut field = synthesize(&sampled, &settings.synthesis_config())?;
    emit(observer, Milestone::Synthesized);

    let pipeline = EnhancementPipeline::from_config(&settings.enhance_config());
    debug!(active = pipeline.stages().len(), "Enhancement pipeline assembled");
    pipeline.run_with(&mut field, |kind, _| emit(&mut *observer, stage_milestone(kind)))?;

    build_geometry(&field, settings, observer)
}

/// Runs the geometry half of the pipeline on a finished height field.
///
/// `field` holds final heights (already scaled by depth and base height)
/// and must match `settings.resolution`. Heights are clamped to
/// `[base_height, base_height + depth]` on a copy; non-finite values
/// become `base_height`. Progress starts at [`Milestone::TopSurface`].
pub fn generate_mesh_from_field(
    field: &HeightField,
    settings: &Settings,
    observer: &mut dyn ProgressObserver,
) -> ReliefResult<MeshBuffers> {
    validate_settings(settings)?;
    if field.resolution() != settings.grid_size() {
        return Err(ReliefError::config(
            "resolution",
            format!(
                "height field has {} samples per side, settings ask for {}",
                field.resolution(),
                settings.grid_size()
            ),
        ));
    }

    let mut field = field.clone();
    let base = settings.base_height;
    let replaced = field.sanitize(base, base + settings.depth, base);
    if replaced > 0 {
        warn!(replaced, "Clamped non-finite heights in supplied field");
    }
    build_geometry(&field, settings, observer)
}

fn build_geometry(
    field: &HeightField,
    settings: &Settings,
    observer: &mut dyn ProgressObserver,
) -> ReliefResult<MeshBuffers> {
    let res = field.resolution();
    let cells = (res - 1) * (res - 1);
    let projector = Projector::new(settings.projection, res);

    let (vertex_capacity, triangle_capacity) = if settings.generate_solid {
        (2 * res * res, 4 * cells + 8 * (res - 1))
    } else {
        (res * res, 2 * cells)
    };
    let mut mesh = MeshBuffers::with_capacity(vertex_capacity, triangle_capacity);

    surface::project_top(&mut mesh, field, &projector);
    surface::triangulate_top(&mut mesh, field, settings.adaptive_resolution);
    emit(observer, Milestone::TopSurface);

    if settings.generate_solid {
        let offset = solid::append_base_vertices(&mut mesh, res, &projector);
        emit(observer, Milestone::BaseVertices);

        solid::append_base_cap(&mut mesh, res, offset);
        emit(observer, Milestone::BaseCap);

        solid::append_side_walls(&mut mesh, res, offset);
    }
    emit(observer, Milestone::Closed);

    if settings.mesh_optimization {
        remove_degenerate_triangles(&mut mesh);
    }
    emit(observer, Milestone::Optimized);

    attach_vertex_normals(&mut mesh, settings.normal_quality());

    mesh.validate()
        .map_err(|e| ReliefError::processing("finalize", e.to_string()))?;
    emit(observer, Milestone::Normals);

    info!(
        vertices = mesh.vertex_count(),
        triangles = mesh.triangle_count(),
        "Mesh generated"
    );
    Ok(mesh)
}

/// Runs [`generate_mesh`] on a named worker thread.
///
/// Pair with a [`relief_telemetry::ProgressBus`] observer to watch
/// progress from the spawning thread.
pub fn spawn_generate<O>(
    raster: Raster,
    settings: Settings,
    mut observer: O,
) -> ReliefResult<JoinHandle<ReliefResult<MeshBuffers>>>
where
    O: ProgressObserver + Send + 'static,
{
    let handle = thread::Builder::new()
        .name("relief-generate".into())
        .spawn(move || generate_mesh(&raster, &settings, &mut observer))?;
    Ok(handle)
}
