//! Pipeline configuration.
//!
//! Domain bounds and sample counts are fixed at run start and shared
//! read-only by every worker. Both configurations are built through fluent
//! builders that validate at `build()` time, so a constructed configuration
//! is always safe to hand to the estimation kernels.

use crate::error::ConfigError;

/// Closed real interval `[lower, upper]` for Riemann-sum integration.
///
/// Invariant: `0 < lower < upper`. Strict positivity is required because the
/// integrand `ln(x)/x` is undefined at and below zero; the partition only
/// ever evaluates at `x = lower + i·h`, so a valid interval guarantees every
/// sample point is in domain.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IntervalBounds {
    lower: f64,
    upper: f64,
}

impl IntervalBounds {
    /// Creates a validated interval.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NonPositiveBound`] if either bound is at or
    /// below zero, or [`ConfigError::EmptyInterval`] if `lower >= upper`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use montequad_core::IntervalBounds;
    ///
    /// let bounds = IntervalBounds::new(1.0, 10.0).unwrap();
    /// assert_eq!(bounds.width(), 9.0);
    ///
    /// assert!(IntervalBounds::new(0.0, 10.0).is_err());
    /// assert!(IntervalBounds::new(5.0, 1.0).is_err());
    /// ```
    pub fn new(lower: f64, upper: f64) -> Result<Self, ConfigError> {
        if !(lower > 0.0) {
            return Err(ConfigError::NonPositiveBound(lower));
        }
        if !(upper > 0.0) {
            return Err(ConfigError::NonPositiveBound(upper));
        }
        if lower >= upper {
            return Err(ConfigError::EmptyInterval { lower, upper });
        }
        Ok(Self { lower, upper })
    }

    /// Returns the lower bound.
    #[inline]
    pub fn lower(&self) -> f64 {
        self.lower
    }

    /// Returns the upper bound.
    #[inline]
    pub fn upper(&self) -> f64 {
        self.upper
    }

    /// Returns the interval width `upper - lower`.
    #[inline]
    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }
}

/// Axis-aligned rectangle in the complex plane used as the Monte Carlo
/// sampling window.
///
/// Invariant: `real_min < real_max` and `imag_min < imag_max`. Unlike
/// [`IntervalBounds`], negative coordinates are legal here.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ComplexRegion {
    real_min: f64,
    real_max: f64,
    imag_min: f64,
    imag_max: f64,
}

impl ComplexRegion {
    /// Creates a validated sampling rectangle.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyInterval`] if either axis is empty or
    /// inverted.
    pub fn new(
        real_min: f64,
        real_max: f64,
        imag_min: f64,
        imag_max: f64,
    ) -> Result<Self, ConfigError> {
        if real_min >= real_max {
            return Err(ConfigError::EmptyInterval {
                lower: real_min,
                upper: real_max,
            });
        }
        if imag_min >= imag_max {
            return Err(ConfigError::EmptyInterval {
                lower: imag_min,
                upper: imag_max,
            });
        }
        Ok(Self {
            real_min,
            real_max,
            imag_min,
            imag_max,
        })
    }

    /// Returns the minimum real coordinate.
    #[inline]
    pub fn real_min(&self) -> f64 {
        self.real_min
    }

    /// Returns the maximum real coordinate.
    #[inline]
    pub fn real_max(&self) -> f64 {
        self.real_max
    }

    /// Returns the minimum imaginary coordinate.
    #[inline]
    pub fn imag_min(&self) -> f64 {
        self.imag_min
    }

    /// Returns the maximum imaginary coordinate.
    #[inline]
    pub fn imag_max(&self) -> f64 {
        self.imag_max
    }

    /// Returns the rectangle area, the scale factor of the hit-ratio
    /// estimate.
    #[inline]
    pub fn area(&self) -> f64 {
        (self.real_max - self.real_min) * (self.imag_max - self.imag_min)
    }
}

impl Default for ComplexRegion {
    /// The classic Mandelbrot sampling window `[-2, 1.5] x [-1, 1]`.
    ///
    /// The set is symmetric about the real axis and contained in this
    /// rectangle, so the window is tight enough for area estimation.
    fn default() -> Self {
        Self {
            real_min: -2.0,
            real_max: 1.5,
            imag_min: -1.0,
            imag_max: 1.0,
        }
    }
}

/// Riemann-sum integration configuration.
///
/// Immutable once built. Use [`IntegrationConfig::builder`] to construct.
///
/// # Examples
///
/// ```rust
/// use montequad_core::IntegrationConfig;
///
/// let config = IntegrationConfig::builder()
///     .bounds(1.0, std::f64::consts::E)
///     .intervals(1_000_000)
///     .build()
///     .expect("valid configuration");
///
/// assert_eq!(config.intervals(), 1_000_000);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct IntegrationConfig {
    bounds: IntervalBounds,
    intervals: usize,
}

impl IntegrationConfig {
    /// Creates a new configuration builder.
    #[inline]
    pub fn builder() -> IntegrationConfigBuilder {
        IntegrationConfigBuilder::default()
    }

    /// Returns the integration interval.
    #[inline]
    pub fn bounds(&self) -> IntervalBounds {
        self.bounds
    }

    /// Returns the number of equal-width subintervals.
    #[inline]
    pub fn intervals(&self) -> usize {
        self.intervals
    }

    /// Returns the subinterval width `(b - a) / n`.
    #[inline]
    pub fn step(&self) -> f64 {
        self.bounds.width() / self.intervals as f64
    }
}

/// Builder for [`IntegrationConfig`].
///
/// Defaults match the reference experiment: `[1, 10]` with one million
/// subintervals.
#[derive(Clone, Copy, Debug)]
pub struct IntegrationConfigBuilder {
    lower: f64,
    upper: f64,
    intervals: usize,
}

impl Default for IntegrationConfigBuilder {
    fn default() -> Self {
        Self {
            lower: 1.0,
            upper: 10.0,
            intervals: 1_000_000,
        }
    }
}

impl IntegrationConfigBuilder {
    /// Sets the integration interval `[lower, upper]`.
    #[inline]
    pub fn bounds(mut self, lower: f64, upper: f64) -> Self {
        self.lower = lower;
        self.upper = upper;
        self
    }

    /// Sets the number of subintervals.
    #[inline]
    pub fn intervals(mut self, intervals: usize) -> Self {
        self.intervals = intervals;
        self
    }

    /// Builds the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the interval is non-positive, empty, or
    /// inverted, or if the subinterval count is zero.
    pub fn build(self) -> Result<IntegrationConfig, ConfigError> {
        let bounds = IntervalBounds::new(self.lower, self.upper)?;
        if self.intervals == 0 {
            return Err(ConfigError::InvalidSampleCount);
        }
        Ok(IntegrationConfig {
            bounds,
            intervals: self.intervals,
        })
    }
}

/// Monte Carlo area-estimation configuration.
///
/// Immutable once built. Use [`MonteCarloConfig::builder`] to construct.
///
/// # Seeding
///
/// With `seed(s)` the whole experiment is reproducible: every run derives its
/// worker streams from `s` and the run ordinal. Without a seed, each run
/// draws a fresh seed from operating-system entropy, so repeated runs are
/// independent samples of the estimator.
///
/// # Examples
///
/// ```rust
/// use montequad_core::MonteCarloConfig;
///
/// let config = MonteCarloConfig::builder()
///     .points(10_000_000)
///     .max_iterations(1000)
///     .seed(42)
///     .build()
///     .expect("valid configuration");
///
/// assert_eq!(config.points(), 10_000_000);
/// assert_eq!(config.seed(), Some(42));
/// ```
#[derive(Clone, Copy, Debug)]
pub struct MonteCarloConfig {
    region: ComplexRegion,
    points: usize,
    max_iterations: u32,
    seed: Option<u64>,
}

impl MonteCarloConfig {
    /// Creates a new configuration builder.
    #[inline]
    pub fn builder() -> MonteCarloConfigBuilder {
        MonteCarloConfigBuilder::default()
    }

    /// Returns the sampling rectangle.
    #[inline]
    pub fn region(&self) -> ComplexRegion {
        self.region
    }

    /// Returns the number of random draws per run.
    #[inline]
    pub fn points(&self) -> usize {
        self.points
    }

    /// Returns the escape-time iteration budget.
    #[inline]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    /// Returns the optional experiment seed.
    #[inline]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }
}

/// Builder for [`MonteCarloConfig`].
///
/// Defaults match the reference experiment: the standard Mandelbrot window,
/// ten million draws, and a thousand iterations.
#[derive(Clone, Copy, Debug)]
pub struct MonteCarloConfigBuilder {
    region: ComplexRegion,
    points: usize,
    max_iterations: u32,
    seed: Option<u64>,
}

impl Default for MonteCarloConfigBuilder {
    fn default() -> Self {
        Self {
            region: ComplexRegion::default(),
            points: 10_000_000,
            max_iterations: 1000,
            seed: None,
        }
    }
}

impl MonteCarloConfigBuilder {
    /// Sets the sampling rectangle.
    #[inline]
    pub fn region(mut self, region: ComplexRegion) -> Self {
        self.region = region;
        self
    }

    /// Sets the number of random draws per run.
    #[inline]
    pub fn points(mut self, points: usize) -> Self {
        self.points = points;
        self
    }

    /// Sets the escape-time iteration budget.
    #[inline]
    pub fn max_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Sets the experiment seed for reproducible draws.
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Builds the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the draw count or iteration budget is zero.
    /// The region is validated when it is constructed, so a builder holding a
    /// [`ComplexRegion`] cannot fail on bounds.
    pub fn build(self) -> Result<MonteCarloConfig, ConfigError> {
        if self.points == 0 {
            return Err(ConfigError::InvalidSampleCount);
        }
        if self.max_iterations == 0 {
            return Err(ConfigError::InvalidIterationCount);
        }
        Ok(MonteCarloConfig {
            region: self.region,
            points: self.points,
            max_iterations: self.max_iterations,
            seed: self.seed,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_interval_bounds_valid() {
        let bounds = IntervalBounds::new(1.0, 10.0).unwrap();
        assert_eq!(bounds.lower(), 1.0);
        assert_eq!(bounds.upper(), 10.0);
        assert_relative_eq!(bounds.width(), 9.0);
    }

    #[test]
    fn test_interval_bounds_zero_lower() {
        let result = IntervalBounds::new(0.0, 10.0);
        assert!(matches!(result, Err(ConfigError::NonPositiveBound(b)) if b == 0.0));
    }

    #[test]
    fn test_interval_bounds_negative_lower() {
        let result = IntervalBounds::new(-1.0, 10.0);
        assert!(matches!(result, Err(ConfigError::NonPositiveBound(_))));
    }

    #[test]
    fn test_interval_bounds_inverted() {
        let result = IntervalBounds::new(5.0, 1.0);
        assert!(matches!(result, Err(ConfigError::EmptyInterval { .. })));
    }

    #[test]
    fn test_interval_bounds_degenerate() {
        let result = IntervalBounds::new(3.0, 3.0);
        assert!(matches!(result, Err(ConfigError::EmptyInterval { .. })));
    }

    #[test]
    fn test_region_default_area() {
        let region = ComplexRegion::default();
        assert_relative_eq!(region.area(), 7.0);
    }

    #[test]
    fn test_region_inverted_axis() {
        assert!(ComplexRegion::new(1.0, -1.0, 0.0, 1.0).is_err());
        assert!(ComplexRegion::new(-1.0, 1.0, 2.0, 1.0).is_err());
    }

    #[test]
    fn test_integration_config_builder_valid() {
        let config = IntegrationConfig::builder()
            .bounds(1.0, 10.0)
            .intervals(100)
            .build()
            .unwrap();

        assert_eq!(config.intervals(), 100);
        assert_relative_eq!(config.step(), 0.09);
    }

    #[test]
    fn test_integration_config_defaults() {
        let config = IntegrationConfig::builder().build().unwrap();
        assert_eq!(config.bounds().lower(), 1.0);
        assert_eq!(config.bounds().upper(), 10.0);
        assert_eq!(config.intervals(), 1_000_000);
    }

    #[test]
    fn test_integration_config_zero_lower_bound() {
        let result = IntegrationConfig::builder()
            .bounds(0.0, 10.0)
            .intervals(100)
            .build();
        assert!(matches!(result, Err(ConfigError::NonPositiveBound(_))));
    }

    #[test]
    fn test_integration_config_inverted_bounds() {
        let result = IntegrationConfig::builder()
            .bounds(5.0, 1.0)
            .intervals(100)
            .build();
        assert!(matches!(result, Err(ConfigError::EmptyInterval { .. })));
    }

    #[test]
    fn test_integration_config_zero_intervals() {
        let result = IntegrationConfig::builder()
            .bounds(1.0, 10.0)
            .intervals(0)
            .build();
        assert!(matches!(result, Err(ConfigError::InvalidSampleCount)));
    }

    #[test]
    fn test_monte_carlo_config_defaults() {
        let config = MonteCarloConfig::builder().build().unwrap();
        assert_eq!(config.points(), 10_000_000);
        assert_eq!(config.max_iterations(), 1000);
        assert_eq!(config.seed(), None);
        assert_relative_eq!(config.region().area(), 7.0);
    }

    #[test]
    fn test_monte_carlo_config_zero_points() {
        let result = MonteCarloConfig::builder().points(0).build();
        assert!(matches!(result, Err(ConfigError::InvalidSampleCount)));
    }

    #[test]
    fn test_monte_carlo_config_zero_iterations() {
        let result = MonteCarloConfig::builder().max_iterations(0).build();
        assert!(matches!(result, Err(ConfigError::InvalidIterationCount)));
    }

    #[test]
    fn test_monte_carlo_config_with_seed() {
        let config = MonteCarloConfig::builder().seed(7).build().unwrap();
        assert_eq!(config.seed(), Some(7));
    }
}
