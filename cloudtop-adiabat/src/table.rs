use crate::{error::TableError, variant::ModelVariant};

/// Number of terms in each θw polynomial (degree 4, so 5 terms).
pub const THETA_W_TERMS: usize = 5;

// Fit constants for the two published surrogates, stored lowest-power-first
// on both axes: row `i` is the θw polynomial behind the coefficient of `tⁱ`,
// and entry `j` within a row multiplies `θwʲ`. The published tables list
// both axes highest-power-first; these are the same constants reordered.
//
// The values are tied one-to-one to the published regression. Changing any
// of them is a model revision, not a configuration change.

static FAST_ROWS: [[f64; THETA_W_TERMS]; 6] = [
    [9.98111805e+02, -1.86535189e+01, -7.22894532e-02, -1.28889861e-04, 4.15209383e-05],
    [1.86846195e+01, -1.58431571e-01, -5.65297782e-03, 7.78264909e-05, -1.69715923e-07],
    [2.34738009e-01, 2.46185591e-03, -1.22319198e-04, -1.92972790e-07, 1.53207987e-08],
    [2.28596093e-03, 5.36097021e-05, -2.29995000e-07, -6.82962603e-08, 9.71770820e-10],
    [1.27504708e-05, 2.98476410e-07, 1.98697357e-08, -1.34431358e-09, 1.83574985e-11],
    [2.92814658e-08, -7.65322959e-11, 1.87653668e-10, -9.43979160e-12, 1.34900172e-13],
];

static PRECISE_ROWS: [[f64; THETA_W_TERMS]; 7] = [
    [9.99811121e+02, -1.92635339e+01, -2.23587882e-02, -1.62042578e-03, 5.64716869e-05],
    [1.92406642e+01, -2.44625335e-01, -1.78557297e-03, 1.76182949e-05, 4.86347926e-08],
    [2.74722979e-01, -2.81625246e-04, -1.36808612e-04, 3.51397283e-06, -4.13270841e-08],
    [3.40521208e-03, 3.47578633e-05, -4.37757525e-06, 1.09514749e-07, -1.04764419e-09],
    [2.72099202e-05, 5.66654023e-07, -5.57183537e-08, 1.04339580e-09, -4.03819245e-12],
    [1.17192247e-07, 2.99865474e-09, -1.90355508e-10, -3.28095045e-12, 1.46826594e-13],
    [2.14085111e-10, 3.27562146e-13, 7.06772534e-13, -6.95711517e-14, 1.34598934e-15],
];

/// An immutable moist-adiabat coefficient table.
///
/// Row `i` holds the θw polynomial `Cᵢ(θw)` behind the coefficient of `tⁱ`,
/// lowest power of `θw` first. Row count must match the selected variant's
/// adiabat degree, which [`CoefficientTable::new`] enforces; the built-in
/// tables obtained via [`CoefficientTable::for_variant`] are correct by
/// construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoefficientTable {
    rows: &'static [[f64; THETA_W_TERMS]],
}

impl CoefficientTable {
    /// Returns the built-in, prevalidated table for a variant.
    #[must_use]
    pub fn for_variant(variant: ModelVariant) -> Self {
        match variant {
            ModelVariant::Fast => Self { rows: &FAST_ROWS },
            ModelVariant::Precise => Self { rows: &PRECISE_ROWS },
        }
    }

    /// Creates a table from custom rows, validating them against a variant.
    ///
    /// Intended for refitted coefficient sets that keep the published model
    /// structure.
    ///
    /// # Errors
    ///
    /// Returns a [`TableError`] if the row count does not equal the
    /// variant's `curve_degree() + 1`, or if any entry is not finite.
    pub fn new(
        rows: &'static [[f64; THETA_W_TERMS]],
        variant: ModelVariant,
    ) -> Result<Self, TableError> {
        let expected = variant.curve_degree() + 1;
        if rows.len() != expected {
            return Err(TableError::RowCount {
                variant,
                expected,
                actual: rows.len(),
            });
        }

        for (i, row) in rows.iter().enumerate() {
            for (j, entry) in row.iter().enumerate() {
                if !entry.is_finite() {
                    return Err(TableError::NonFiniteEntry { row: i, col: j });
                }
            }
        }

        Ok(Self { rows })
    }

    pub(crate) fn rows(&self) -> &'static [[f64; THETA_W_TERMS]] {
        self.rows
    }
}
