//! Vehicle fleet state and queries

use geometry::{
    base_corners, extract_edges, flatten_segments, intersects_all_pairs, normalize_angle,
    normalize_angles, transform_corners, Point, CORNERS,
};
use ndarray::{s, Array1, Array2, Array3, ArrayView1, ArrayView2, Zip};
use std::f64::consts::PI;
use tracing::debug;

use crate::cache::{CacheState, CoordinateCache};
use crate::config::SensorConfig;
use crate::error::{expect_shape, FleetError};

/// Default vehicle footprint (length, width) in meters
pub const DEFAULT_DIMENSIONS: Point = [4.48, 2.2];

/// Safety circle radius as a multiple of the half-diagonal
pub const SAFETY_FACTOR: f64 = 1.3;

/// Added to the distance to a target before normalizing
const NORM_EPSILON: f64 = 1e-7;

/// Keeps `acos` away from ±1
const COSINE_MARGIN: f64 = 1e-5;

/// Columns of a state row: x, y, speed, orientation
pub const STATE_COLUMNS: usize = 4;

/// Construction inputs for a fleet of N vehicles
#[derive(Debug, Clone)]
pub struct FleetParams {
    /// N×2 positions
    pub position: Array2<f64>,
    /// N headings (radians)
    pub orientation: Array1<f64>,
    /// N×2 destinations
    pub destination: Array2<f64>,
    /// N headings wanted at the destination
    pub dest_orientation: Array1<f64>,
    /// N×2 (length, width)
    pub dimensions: Array2<f64>,
    /// N speeds
    pub initial_speed: Array1<f64>,
    /// N labels
    pub names: Vec<String>,
}

impl FleetParams {
    /// Params with default footprints, zero speed and "car" labels
    pub fn new(
        position: Array2<f64>,
        orientation: Array1<f64>,
        destination: Array2<f64>,
        dest_orientation: Array1<f64>,
    ) -> Self {
        let n = position.nrows();
        Self {
            position,
            orientation,
            destination,
            dest_orientation,
            dimensions: Array2::from_shape_fn((n, 2), |(_, c)| DEFAULT_DIMENSIONS[c]),
            initial_speed: Array1::zeros(n),
            names: vec!["car".to_string(); n],
        }
    }

    /// Params for a fleet of one
    pub fn single(position: Point, orientation: f64, destination: Point, dest_orientation: f64) -> Self {
        Self::new(
            Array2::from_shape_fn((1, 2), |(_, c)| position[c]),
            Array1::from_elem(1, orientation),
            Array2::from_shape_fn((1, 2), |(_, c)| destination[c]),
            Array1::from_elem(1, dest_orientation),
        )
    }

    pub fn with_dimensions(mut self, dimensions: Array2<f64>) -> Self {
        self.dimensions = dimensions;
        self
    }

    pub fn with_speed(mut self, speed: Array1<f64>) -> Self {
        self.initial_speed = speed;
        self
    }

    pub fn with_names(mut self, names: Vec<String>) -> Self {
        self.names = names;
        self
    }

    fn validate(&self) -> Result<usize, FleetError> {
        let n = self.position.nrows();
        expect_shape("position", &[n, 2], self.position.shape())?;
        expect_shape("orientation", &[n], self.orientation.shape())?;
        expect_shape("destination", &[n, 2], self.destination.shape())?;
        expect_shape("dest_orientation", &[n], self.dest_orientation.shape())?;
        expect_shape("dimensions", &[n, 2], self.dimensions.shape())?;
        expect_shape("initial_speed", &[n], self.initial_speed.shape())?;
        expect_shape("names", &[n], &[self.names.len()])?;

        for (index, dims) in self.dimensions.outer_iter().enumerate() {
            let (length, width) = (dims[0], dims[1]);
            let positive = |v: f64| v.is_finite() && v > 0.0;
            if !positive(length) || !positive(width) {
                return Err(FleetError::InvalidDimension { index, length, width });
            }
        }
        Ok(n)
    }
}

/// Where a distance or heading query points to
#[derive(Debug, Clone, Copy)]
pub enum Target<'a> {
    /// One point shared by every vehicle
    Point(Point),
    /// One point per vehicle (N×2)
    PerVehicle(ArrayView2<'a, f64>),
}

/// A fixed-size batch of rectangular vehicles
///
/// Per-vehicle fields are stored as one contiguous array each, with the
/// vehicle index as the leading axis.
#[derive(Debug, Clone)]
pub struct VehicleFleet {
    names: Vec<String>,
    position: Array2<f64>,
    orientation: Array1<f64>,
    speed: Array1<f64>,
    destination: Array2<f64>,
    dest_orientation: Array1<f64>,
    dimensions: Array2<f64>,
    safety_radius: Array1<f64>,
    safety_area: Array1<f64>,
    base_corners: Array3<f64>,
    coordinates: CoordinateCache,
    /// 4N×4N, true where the two edges belong to different vehicles
    cross_vehicle: Array2<bool>,
    sensors: SensorConfig,
}

impl VehicleFleet {
    /// Build a fleet, normalizing headings and computing the footprint
    pub fn new(params: FleetParams, sensors: SensorConfig) -> Result<Self, FleetError> {
        let n = params.validate()?;
        sensors.validate()?;

        let FleetParams {
            position,
            mut orientation,
            destination,
            mut dest_orientation,
            dimensions,
            initial_speed,
            names,
        } = params;

        normalize_angles(orientation.view_mut());
        normalize_angles(dest_orientation.view_mut());

        let safety_radius = dimensions
            .outer_iter()
            .map(|dims| SAFETY_FACTOR * (dims[0] / 2.0).hypot(dims[1] / 2.0))
            .collect::<Array1<f64>>();
        let safety_area = safety_radius.mapv(|r| PI * r * r);

        let base_corners = base_corners(dimensions.view())?;
        let corners = transform_corners(base_corners.view(), orientation.view(), position.view())?;

        let edges = n * CORNERS;
        let cross_vehicle =
            Array2::from_shape_fn((edges, edges), |(i, j)| i / CORNERS != j / CORNERS);

        debug!(
            "Created fleet: vehicles={}, lidar=[{}, {}]m, vision={}m",
            n, sensors.min_lidar_range, sensors.max_lidar_range, sensors.vision_range
        );

        Ok(Self {
            names,
            position,
            orientation,
            speed: initial_speed,
            destination,
            dest_orientation,
            dimensions,
            safety_radius,
            safety_area,
            base_corners,
            coordinates: CoordinateCache::valid(corners),
            cross_vehicle,
            sensors,
        })
    }

    /// A fleet of one vehicle with default footprint and sensors
    pub fn single(
        position: Point,
        orientation: f64,
        destination: Point,
        dest_orientation: f64,
    ) -> Result<Self, FleetError> {
        Self::new(
            FleetParams::single(position, orientation, destination, dest_orientation),
            SensorConfig::single_vehicle(),
        )
    }

    /// Number of vehicles
    pub fn len(&self) -> usize {
        self.position.nrows()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn position(&self) -> ArrayView2<'_, f64> {
        self.position.view()
    }

    pub fn orientation(&self) -> ArrayView1<'_, f64> {
        self.orientation.view()
    }

    pub fn speed(&self) -> ArrayView1<'_, f64> {
        self.speed.view()
    }

    pub fn destination(&self) -> ArrayView2<'_, f64> {
        self.destination.view()
    }

    pub fn dest_orientation(&self) -> ArrayView1<'_, f64> {
        self.dest_orientation.view()
    }

    pub fn dimensions(&self) -> ArrayView2<'_, f64> {
        self.dimensions.view()
    }

    pub fn safety_radius(&self) -> ArrayView1<'_, f64> {
        self.safety_radius.view()
    }

    pub fn safety_area(&self) -> ArrayView1<'_, f64> {
        self.safety_area.view()
    }

    /// N×4×2 corners in the vehicle frame
    pub fn base_corners(&self) -> &Array3<f64> {
        &self.base_corners
    }

    pub fn sensors(&self) -> &SensorConfig {
        &self.sensors
    }

    pub fn cache_state(&self) -> CacheState {
        self.coordinates.state()
    }

    /// N×4×2 world-space corners, recomputed only after a state update
    pub fn coordinates(&self) -> Result<&Array3<f64>, FleetError> {
        self.coordinates.ensure_valid(|| {
            transform_corners(
                self.base_corners.view(),
                self.orientation.view(),
                self.position.view(),
            )
            .map_err(FleetError::from)
        })
    }

    /// The 4 edges of every vehicle as `(p1, p2)`, both N×4×2, with
    /// `p2[i, k] == p1[i, (k + 1) % 4]`
    pub fn edges(&self) -> Result<(Array3<f64>, Array3<f64>), FleetError> {
        let corners = self.coordinates()?;
        Ok(extract_edges(corners.view())?)
    }

    /// Replace position, speed and orientation from N×4 rows of
    /// (x, y, speed, orientation). Nothing changes if the shape is wrong.
    pub fn update_state(&mut self, state: ArrayView2<'_, f64>) -> Result<(), FleetError> {
        let n = self.len();
        expect_shape("state", &[n, STATE_COLUMNS], state.shape())?;

        self.position.assign(&state.slice(s![.., 0..2]));
        self.speed.assign(&state.column(2));
        Zip::from(&mut self.orientation)
            .and(state.column(3))
            .for_each(|theta, &new| *theta = normalize_angle(new));
        self.coordinates.invalidate();
        Ok(())
    }

    /// N×4 rows of (x, y, speed, orientation)
    pub fn state(&self) -> Array2<f64> {
        let mut state = Array2::zeros((self.len(), STATE_COLUMNS));
        state.slice_mut(s![.., 0..2]).assign(&self.position);
        state.column_mut(2).assign(&self.speed);
        state.column_mut(3).assign(&self.orientation);
        state
    }

    fn resolve<'t>(&self, target: Target<'t>) -> Result<Target<'t>, FleetError> {
        if let Target::PerVehicle(points) = target {
            expect_shape("target", &[self.len(), 2], points.shape())?;
        }
        Ok(target)
    }

    /// Euclidean distance from each vehicle to the target
    pub fn distance_from_point(&self, target: Target<'_>) -> Result<Array1<f64>, FleetError> {
        let target = self.resolve(target)?;
        Ok(self.map_targets(target, |i, point| {
            (point[0] - self.position[[i, 0]]).hypot(point[1] - self.position[[i, 1]])
        }))
    }

    pub fn distance_from_destination(&self) -> Array1<f64> {
        self.map_targets(Target::PerVehicle(self.destination.view()), |i, point| {
            (point[0] - self.position[[i, 0]]).hypot(point[1] - self.position[[i, 1]])
        })
    }

    /// Signed turn from the current heading to face the target, in
    /// (-π, π]; positive is counter-clockwise.
    pub fn optimal_heading_to_point(&self, target: Target<'_>) -> Result<Array1<f64>, FleetError> {
        let target = self.resolve(target)?;
        Ok(self.map_targets(target, |i, point| self.heading_to(i, point)))
    }

    pub fn optimal_heading(&self) -> Array1<f64> {
        self.map_targets(Target::PerVehicle(self.destination.view()), |i, point| {
            self.heading_to(i, point)
        })
    }

    fn map_targets(&self, target: Target<'_>, f: impl Fn(usize, Point) -> f64) -> Array1<f64> {
        Array1::from_shape_fn(self.len(), |i| {
            let point = match target {
                Target::Point(point) => point,
                Target::PerVehicle(points) => [points[[i, 0]], points[[i, 1]]],
            };
            f(i, point)
        })
    }

    fn heading_to(&self, i: usize, point: Point) -> f64 {
        let dx = point[0] - self.position[[i, 0]];
        let dy = point[1] - self.position[[i, 1]];
        let norm = dx.hypot(dy) + NORM_EPSILON;
        let (ux, uy) = (dx / norm, dy / norm);

        let (hy, hx) = self.orientation[i].sin_cos();
        let cosine = (ux * hx + uy * hy).clamp(-1.0 + COSINE_MARGIN, 1.0 - COSINE_MARGIN);
        let turn = cosine.acos();

        // Cross product picks the turn direction
        let signed = if hx * uy - hy * ux < 0.0 { -turn } else { turn };
        normalize_angle(signed)
    }

    /// Per vehicle, whether any of its edges touches an edge of another
    /// vehicle in this fleet
    pub fn collision_check(&self) -> Result<Array1<bool>, FleetError> {
        let (p1, p2) = self.edges()?;
        let starts = flatten_segments(p1.view())?;
        let ends = flatten_segments(p2.view())?;

        let mut hits = intersects_all_pairs(starts.view(), ends.view(), starts.view(), ends.view())?;
        Zip::from(&mut hits)
            .and(&self.cross_vehicle)
            .for_each(|hit, &other| *hit &= other);

        let colliding = (0..self.len())
            .map(|v| {
                hits.slice(s![v * CORNERS..(v + 1) * CORNERS, ..])
                    .iter()
                    .any(|&hit| hit)
            })
            .collect::<Array1<bool>>();

        debug!(
            "Collision check: {} of {} vehicles colliding",
            colliding.iter().filter(|&&c| c).count(),
            self.len()
        );
        Ok(colliding)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;
    use proptest::prelude::*;
    use std::f64::consts::FRAC_PI_2;

    fn two_cars(second_x: f64) -> VehicleFleet {
        let params = FleetParams::new(
            array![[0.0, 0.0], [second_x, 0.0]],
            array![0.0, 0.0],
            array![[10.0, 0.0], [30.0, 0.0]],
            array![0.0, 0.0],
        )
        .with_dimensions(array![[4.0, 2.0], [4.0, 2.0]]);
        VehicleFleet::new(params, SensorConfig::default()).unwrap()
    }

    #[test]
    fn test_construction_derives_footprint() {
        let fleet = two_cars(3.0);

        assert_eq!(fleet.len(), 2);
        assert_eq!(fleet.cache_state(), CacheState::Valid);
        assert_eq!(fleet.names(), &["car".to_string(), "car".to_string()]);

        let radius = 1.3 * 5f64.sqrt();
        assert!((fleet.safety_radius()[0] - radius).abs() < 1e-12);
        assert!((fleet.safety_area()[0] - PI * radius * radius).abs() < 1e-9);
        assert_eq!(fleet.base_corners()[[0, 0, 0]], 2.0);
        assert_eq!(fleet.base_corners()[[0, 2, 1]], -1.0);
    }

    #[test]
    fn test_orientation_normalized_on_intake() {
        let params = FleetParams::new(
            array![[0.0, 0.0]],
            array![3.0 * FRAC_PI_2],
            array![[0.0, 0.0]],
            array![-PI],
        );
        let fleet = VehicleFleet::new(params, SensorConfig::default()).unwrap();

        assert!((fleet.orientation()[0] + FRAC_PI_2).abs() < 1e-12);
        assert!((fleet.dest_orientation()[0] - PI).abs() < 1e-12);
    }

    #[test]
    fn test_shape_mismatch() {
        let params = FleetParams::new(
            array![[0.0, 0.0], [1.0, 1.0]],
            array![0.0],
            array![[0.0, 0.0], [1.0, 1.0]],
            array![0.0, 0.0],
        );
        let result = VehicleFleet::new(params, SensorConfig::default());
        assert!(matches!(
            result,
            Err(FleetError::ShapeMismatch { field: "orientation", .. })
        ));

        let params = FleetParams::single([0.0, 0.0], 0.0, [1.0, 1.0], 0.0)
            .with_names(vec!["a".into(), "b".into()]);
        let result = VehicleFleet::new(params, SensorConfig::default());
        assert!(matches!(
            result,
            Err(FleetError::ShapeMismatch { field: "names", .. })
        ));
    }

    #[test]
    fn test_non_positive_dimensions() {
        let params = FleetParams::single([0.0, 0.0], 0.0, [1.0, 1.0], 0.0)
            .with_dimensions(array![[4.0, 0.0]]);
        assert!(matches!(
            VehicleFleet::new(params, SensorConfig::default()),
            Err(FleetError::InvalidDimension { index: 0, .. })
        ));
    }

    #[test]
    fn test_invalid_sensors() {
        let params = FleetParams::single([0.0, 0.0], 0.0, [1.0, 1.0], 0.0);
        let sensors = SensorConfig {
            min_lidar_range: 10.0,
            max_lidar_range: 5.0,
            vision_range: 50.0,
        };
        assert!(matches!(
            VehicleFleet::new(params, sensors),
            Err(FleetError::InvalidRange { .. })
        ));
    }

    #[test]
    fn test_single_vehicle_defaults() {
        let fleet = VehicleFleet::single([1.0, 2.0], 0.0, [5.0, 5.0], 0.0).unwrap();

        assert_eq!(fleet.len(), 1);
        assert_eq!(fleet.dimensions()[[0, 0]], 4.48);
        assert_eq!(fleet.dimensions()[[0, 1]], 2.2);
        assert_eq!(fleet.speed()[0], 0.0);
        assert_eq!(fleet.sensors().min_lidar_range, 1.0);
    }

    #[test]
    fn test_overlapping_rectangles_collide() {
        let fleet = two_cars(3.0);
        assert_eq!(fleet.collision_check().unwrap(), array![true, true]);
    }

    #[test]
    fn test_distant_rectangles_clear() {
        let fleet = two_cars(20.0);
        assert_eq!(fleet.collision_check().unwrap(), array![false, false]);
    }

    fn convoy(gap: f64, theta: f64) -> VehicleFleet {
        let (sin, cos) = theta.sin_cos();
        let params = FleetParams::new(
            array![[0.0, 0.0], [gap * cos, gap * sin]],
            array![theta, theta],
            array![[0.0, 0.0], [0.0, 0.0]],
            array![0.0, 0.0],
        )
        .with_dimensions(array![[4.0, 2.0], [4.0, 2.0]]);
        VehicleFleet::new(params, SensorConfig::default()).unwrap()
    }

    #[test]
    fn test_rotated_convoy_clear() {
        // One behind the other on a shared heading, 16 m bumper to bumper
        for k in 1..2000 {
            let theta = k as f64 * 0.00314;
            let collisions = convoy(20.0, theta).collision_check().unwrap();
            assert_eq!(collisions, array![false, false], "theta={theta}");
        }
    }

    #[test]
    fn test_rotated_convoy_overlapping() {
        for k in 0..200 {
            let theta = k as f64 * 0.0314;
            let collisions = convoy(3.0, theta).collision_check().unwrap();
            assert_eq!(collisions, array![true, true], "theta={theta}");
        }
    }

    #[test]
    fn test_collision_only_flags_involved_vehicles() {
        let params = FleetParams::new(
            array![[0.0, 0.0], [0.0, 1.5], [50.0, 50.0]],
            array![0.0, FRAC_PI_2, 0.3],
            array![[0.0, 0.0], [0.0, 0.0], [0.0, 0.0]],
            array![0.0, 0.0, 0.0],
        );
        let fleet = VehicleFleet::new(params, SensorConfig::default()).unwrap();
        assert_eq!(fleet.collision_check().unwrap(), array![true, true, false]);
    }

    #[test]
    fn test_lone_vehicle_never_collides() {
        let fleet = VehicleFleet::single([0.0, 0.0], 0.7, [1.0, 1.0], 0.0).unwrap();
        assert_eq!(fleet.collision_check().unwrap(), array![false]);
    }

    #[test]
    fn test_empty_fleet() {
        let params = FleetParams::new(
            Array2::zeros((0, 2)),
            Array1::zeros(0),
            Array2::zeros((0, 2)),
            Array1::zeros(0),
        );
        let fleet = VehicleFleet::new(params, SensorConfig::default()).unwrap();

        assert!(fleet.is_empty());
        assert_eq!(fleet.coordinates().unwrap().shape(), &[0, 4, 2]);
        assert_eq!(fleet.collision_check().unwrap().len(), 0);
        assert_eq!(fleet.state().shape(), &[0, 4]);
    }

    #[test]
    fn test_edges_follow_corners() {
        let fleet = two_cars(3.0);
        let (p1, p2) = fleet.edges().unwrap();
        let corners = fleet.coordinates().unwrap();

        assert_eq!(&p1, corners);
        for i in 0..2 {
            for k in 0..4 {
                assert_eq!(p2[[i, k, 0]], corners[[i, (k + 1) % 4, 0]]);
                assert_eq!(p2[[i, k, 1]], corners[[i, (k + 1) % 4, 1]]);
            }
        }
    }

    #[test]
    fn test_update_invalidates_and_recomputes() {
        let mut fleet = two_cars(3.0);
        let before = fleet.coordinates().unwrap().clone();

        fleet
            .update_state(array![[1.0, 2.0, 5.0, FRAC_PI_2], [3.0, 0.0, 0.0, 0.0]].view())
            .unwrap();
        assert_eq!(fleet.cache_state(), CacheState::Stale);

        let after = fleet.coordinates().unwrap().clone();
        assert_eq!(fleet.cache_state(), CacheState::Valid);
        assert_ne!(before, after);

        let expected = transform_corners(
            fleet.base_corners().view(),
            fleet.orientation(),
            fleet.position(),
        )
        .unwrap();
        assert_eq!(after, expected);
        // Second vehicle did not move
        assert_eq!(
            before.index_axis(ndarray::Axis(0), 1),
            after.index_axis(ndarray::Axis(0), 1)
        );
    }

    #[test]
    fn test_coordinates_idempotent() {
        let fleet = two_cars(3.0);
        let first = fleet.coordinates().unwrap().clone();
        let second = fleet.coordinates().unwrap();
        assert_eq!(&first, second);
    }

    #[test]
    fn test_state_round_trip() {
        let mut fleet = two_cars(3.0);
        let state = array![[1.0, 2.0, 3.0, 0.5], [-4.0, 5.0, 6.0, -0.5]];
        fleet.update_state(state.view()).unwrap();

        assert_eq!(fleet.state(), state);
        assert_eq!(fleet.speed(), array![3.0, 6.0]);
    }

    #[test]
    fn test_update_normalizes_orientation() {
        let mut fleet = two_cars(3.0);
        fleet
            .update_state(array![[0.0, 0.0, 0.0, 7.0], [0.0, 0.0, 0.0, -4.0]].view())
            .unwrap();

        assert!((fleet.orientation()[0] - (7.0 - 2.0 * PI)).abs() < 1e-12);
        assert!((fleet.orientation()[1] - (2.0 * PI - 4.0)).abs() < 1e-12);
    }

    #[test]
    fn test_update_wrong_shape_leaves_state() {
        let mut fleet = two_cars(3.0);
        let result = fleet.update_state(array![[9.0, 9.0, 9.0, 9.0]].view());

        assert!(matches!(result, Err(FleetError::ShapeMismatch { field: "state", .. })));
        assert_eq!(fleet.position()[[1, 0]], 3.0);
        assert_eq!(fleet.cache_state(), CacheState::Valid);
    }

    #[test]
    fn test_distances() {
        let fleet = two_cars(3.0);

        let to_origin = fleet.distance_from_point(Target::Point([0.0, 4.0])).unwrap();
        assert!((to_origin[0] - 4.0).abs() < 1e-12);
        assert!((to_origin[1] - 5.0).abs() < 1e-12);

        let to_dest = fleet.distance_from_destination();
        assert!((to_dest[0] - 10.0).abs() < 1e-12);
        assert!((to_dest[1] - 27.0).abs() < 1e-12);

        let per_vehicle = array![[0.0, 1.0], [3.0, 2.0]];
        let d = fleet
            .distance_from_point(Target::PerVehicle(per_vehicle.view()))
            .unwrap();
        assert_eq!(d, array![1.0, 2.0]);
    }

    #[test]
    fn test_target_shape_mismatch() {
        let fleet = two_cars(3.0);
        let points = array![[0.0, 1.0]];
        assert!(fleet.distance_from_point(Target::PerVehicle(points.view())).is_err());
        assert!(fleet.optimal_heading_to_point(Target::PerVehicle(points.view())).is_err());
    }

    #[test]
    fn test_heading_quarter_turn() {
        let fleet = VehicleFleet::single([0.0, 0.0], 0.0, [0.0, 5.0], 0.0).unwrap();

        let heading = fleet.optimal_heading_to_point(Target::Point([0.0, 5.0])).unwrap();
        assert!((heading[0] - FRAC_PI_2).abs() < 1e-6);

        let heading = fleet.optimal_heading_to_point(Target::Point([0.0, -5.0])).unwrap();
        assert!((heading[0] + FRAC_PI_2).abs() < 1e-6);

        assert!((fleet.optimal_heading()[0] - FRAC_PI_2).abs() < 1e-6);
    }

    #[test]
    fn test_heading_stays_finite() {
        let fleet = VehicleFleet::single([1.0, 1.0], 0.4, [0.0, 0.0], 0.0).unwrap();

        // Target at the vehicle's own position
        let heading = fleet.optimal_heading_to_point(Target::Point([1.0, 1.0])).unwrap();
        assert!(heading[0].is_finite());

        // Straight ahead and straight behind stay off the acos poles
        let ahead = fleet
            .optimal_heading_to_point(Target::Point([1.0 + 0.4f64.cos(), 1.0 + 0.4f64.sin()]))
            .unwrap();
        assert!(ahead[0].abs() < 1e-2);
        let behind = fleet
            .optimal_heading_to_point(Target::Point([1.0 - 0.4f64.cos(), 1.0 - 0.4f64.sin()]))
            .unwrap();
        assert!((behind[0].abs() - PI).abs() < 1e-2);
    }

    proptest! {
        #[test]
        fn prop_orientation_in_range_after_update(
            x in -50.0f64..50.0,
            y in -50.0f64..50.0,
            theta in -100.0f64..100.0,
        ) {
            let mut fleet = VehicleFleet::single([0.0, 0.0], theta, [0.0, 0.0], theta).unwrap();
            prop_assert!(fleet.orientation()[0] > -PI && fleet.orientation()[0] <= PI);
            prop_assert!(fleet.dest_orientation()[0] > -PI && fleet.dest_orientation()[0] <= PI);

            fleet.update_state(array![[x, y, 1.0, theta * 3.0]].view()).unwrap();
            prop_assert!(fleet.orientation()[0] > -PI && fleet.orientation()[0] <= PI);
        }
    }
}
