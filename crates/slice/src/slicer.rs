//! Top-level cut orchestration

use log::warn;

use crate::binning::BinSpec;
use crate::error::{Error, Result};
use crate::extents::calculate_extents;
use crate::labels::projection_labels;
use crate::projection::{Basis, ProjectionTable};
use crate::rebin::{BasisVector, Rebin, RebinMode, RebinRequest};
use crate::workspace::{CoordinateSystem, MdDataset};

/// Slices a multidimensional HKL dataset using projection information
///
/// Collects the dataset metadata, an optional projection table, the four
/// per-axis binning specifications, and the output mode flag, then derives
/// everything a downstream binner needs and delegates through [Rebin].
///
/// Each call is independent and stateless; every derived value lives only
/// for the duration of [CutMd::run].
///
/// ```rust
/// # use mdtools_slice::{BinSpec, CutMd, MdDataset, MdDimension, RebinRequest, Rebin, Result};
/// # struct Echo;
/// # impl Rebin for Echo {
/// #     type Output = RebinRequest;
/// #     fn rebin(&mut self, request: RebinRequest) -> Result<RebinRequest> { Ok(request) }
/// # }
/// let dataset = MdDataset::hkl(vec![
///     MdDimension::new("H", "r.l.u.", -5.0, 5.0),
///     MdDimension::new("K", "r.l.u.", -5.0, 5.0),
///     MdDimension::new("L", "r.l.u.", -5.0, 5.0),
/// ]);
///
/// let request = CutMd::new(dataset)
///     .bin_specs([
///         BinSpec::from(vec![1.0]),
///         BinSpec::from(vec![1.0]),
///         BinSpec::from(vec![1.0]),
///         BinSpec::empty(),
///     ])
///     .run(&mut Echo)
///     .unwrap();
///
/// assert_eq!(request.bins, [10, 10, 10]);
/// ```
///
/// Note each axis resolves its own binning specification against its own
/// dimension. The historical implementation reused the first axis's
/// specification for all three, which was a defect rather than a contract.
#[derive(Debug, Clone)]
pub struct CutMd {
    dataset: MdDataset,
    projection: Option<ProjectionTable>,
    bin_specs: [BinSpec; 4],
    no_pix: bool,
}

impl CutMd {
    /// Start a cut over `dataset` with the identity projection
    pub fn new(dataset: MdDataset) -> Self {
        Self {
            dataset,
            projection: None,
            bin_specs: Default::default(),
            no_pix: false,
        }
    }

    /// Supply a user projection table
    pub fn projection(mut self, table: ProjectionTable) -> Self {
        self.projection = Some(table);
        self
    }

    /// Supply the per-axis binning specifications
    ///
    /// The fourth slot corresponds to a non-crystallographic dimension and
    /// is accepted but unused until basis-vector generation beyond 3
    /// dimensions is supported.
    pub fn bin_specs(mut self, specs: [BinSpec; 4]) -> Self {
        self.bin_specs = specs;
        self
    }

    /// Request histogrammed output with no pixel data
    pub fn no_pix(mut self, no_pix: bool) -> Self {
        self.no_pix = no_pix;
        self
    }

    /// Validate the inputs and build the downstream request
    ///
    /// Everything [CutMd::run] does short of the delegation itself, exposed
    /// for callers that want to inspect the request.
    pub fn build_request(&self) -> Result<RebinRequest> {
        if self.dataset.coordinate_system != CoordinateSystem::Hkl {
            return Err(Error::WrongCoordinateSystem(self.dataset.coordinate_system));
        }

        if let Some(table) = &self.projection {
            warn!("projection columns received: {}", table.column_names().join(", "));
        }
        let basis = Basis::from_table(self.projection.as_ref())?;

        if self.dataset.ndims() > 3 {
            return Err(Error::UnsupportedDimensionality(self.dataset.ndims()));
        }

        // independent per-axis resolution against each dimension's extent
        let mut bins = Vec::with_capacity(3);
        for (spec, dimension) in self.bin_specs.iter().zip(&self.dataset.dimensions).take(3) {
            let binning = spec.resolve(dimension.min, dimension.max)?;
            bins.push(binning.bin_count());
        }

        let extents = calculate_extents(&basis, &self.dataset)?;
        let labels = projection_labels(&basis);

        let basis_vectors = labels
            .into_iter()
            .zip(basis.vectors())
            .zip(&self.dataset.dimensions)
            .map(|((label, vector), dimension)| BasisVector {
                label,
                unit: dimension.unit.clone(),
                direction: [vector.x, vector.y, vector.z],
            })
            .collect();

        Ok(RebinRequest {
            mode: if self.no_pix {
                RebinMode::Histogram
            } else {
                RebinMode::Event
            },
            basis_vectors,
            extents,
            bins,
            normalize_basis_vectors: false,
            axis_aligned: false,
        })
    }

    /// Build the request and delegate to the rebin service
    ///
    /// Returns the service's single output workspace handle. All failure
    /// modes are raised before the delegation; once the binner is called no
    /// further validation happens on this side.
    pub fn run<R: Rebin>(&self, binner: &mut R) -> Result<R::Output> {
        let request = self.build_request()?;
        binner.rebin(request)
    }
}
