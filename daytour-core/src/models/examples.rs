//! Provides example models used in documentation, demos and benchmarks.

use crate::models::common::Duration;
use crate::models::problem::{Attraction, TravelMatrix, WaitCurve};
use crate::models::Park;
use crate::utils::GenericResult;

/// Creates a small synthetic park with deterministic wait curves covering hours 9 to 21.
pub fn create_example_park() -> GenericResult<Park> {
    let attraction = |id: &str, stay_time: Duration, waits: &[Duration]| -> GenericResult<Attraction> {
        let samples = waits.iter().zip(9u32..).map(|(&wait, hour)| (hour, wait)).collect::<Vec<_>>();
        Attraction::new(id, stay_time, WaitCurve::new(&samples)?)
    };

    let attractions = vec![
        attraction("fantasia_carousel", 8., &[5., 10., 15., 20., 20., 25., 20., 20., 15., 15., 10., 10., 5.])?,
        attraction("space_coaster", 12., &[45., 70., 90., 85., 80., 75., 70., 65., 60., 55., 50., 40., 30.])?,
        attraction("log_flume", 10., &[10., 15., 25., 35., 50., 65., 70., 65., 55., 40., 30., 20., 10.])?,
        attraction("haunted_manor", 9., &[20., 25., 30., 30., 35., 35., 35., 30., 30., 25., 25., 20., 15.])?,
        attraction("pirate_voyage", 15., &[15., 20., 25., 30., 35., 40., 40., 35., 30., 25., 20., 15., 10.])?,
        attraction("sky_drop", 6., &[60., 50., 45., 40., 35., 30., 25., 25., 20., 20., 15., 10., 5.])?,
        attraction("river_rapids", 11., &[10., 20., 30., 45., 60., 70., 75., 70., 60., 45., 30., 15., 10.])?,
        attraction("grand_theater", 25., &[5., 10., 40., 10., 45., 10., 50., 10., 45., 10., 40., 10., 5.])?,
    ];

    #[rustfmt::skip]
    let durations = vec![
        0., 7., 4., 10., 6., 12., 9., 5.,
        7., 0., 8., 5., 11., 6., 13., 9.,
        4., 8., 0., 7., 3., 9., 5., 8.,
        10., 5., 7., 0., 9., 4., 11., 6.,
        6., 11., 3., 9., 0., 10., 4., 7.,
        12., 6., 9., 4., 10., 0., 8., 3.,
        9., 13., 5., 11., 4., 8., 0., 12.,
        5., 9., 8., 6., 7., 3., 12., 0.,
    ];
    let size = attractions.len();

    Park::new(attractions, TravelMatrix::new(durations, size)?)
}
