/// ----- RIDER GENERATOR -----
/// Feeds the building with riders at a fixed interval. Each rider appears on
/// a random floor with a random, different destination.

use std::io;
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use rand::Rng;
use tracing::{debug, info};

use crate::utilities::rider::Rider;

use super::floor::Building;

pub fn generate(building: Arc<Building>, num_riders: u32, interval: Duration) -> io::Result<JoinHandle<()>> {
    thread::Builder::new()
        .name("rider_generator".into())
        .spawn(move || {
            let mut rng = rand::thread_rng();
            let num_floors = building.num_floors();
            for i in 0..num_riders {
                thread::sleep(interval);
                let (src_no, target_no) = pick_trip(&mut rng, num_floors);
                let (Some(src), Some(target)) = (building.floor(src_no), building.floor(target_no)) else {
                    continue;
                };
                let rider = Rider::new(format!("rider{}", i), target_no);
                debug!(rider = %rider, floor = src_no, "rider arrived");
                src.add(rider, src.locate(target).opposite());
            }
            info!(num_riders, "all riders generated");
        })
}

/// Source and destination floors, never equal.
fn pick_trip(rng: &mut impl Rng, num_floors: u8) -> (u8, u8) {
    let src = rng.gen_range(1..=num_floors);
    // skip over the source floor
    let mut target = rng.gen_range(1..num_floors);
    if target >= src {
        target += 1;
    }
    (src, target)
}
