//! Fake startup work.
//!
//! The jobs run on a worker thread so the splash loop stays responsive. They
//! never touch the splash directly: status text and the final close request
//! go through the [`SplashHandle`] and are applied by the owning loop.

use std::thread::{self, JoinHandle};
use std::time::Duration;

use splashscreen::SplashHandle;
use tracing::{info, warn};

pub fn spawn(
    handle: SplashHandle,
    job_time: Duration,
) -> JoinHandle<()> {
    thread::spawn(move || {
        if let Err(e) = run(&handle, job_time) {
            warn!("startup jobs stopped early: {e}");
        }
    })
}

fn run(
    handle: &SplashHandle,
    job_time: Duration,
) -> splashscreen::Result<()> {
    handle.set_status("Doing something...")?;
    do_something("Hello,", "world", job_time);

    handle.set_status("Doing something else...")?;
    do_something("Goodbye,", "world!", job_time);

    handle.set_status("Loading complete!")?;
    handle.set_close_splashscreen(true)
}

fn do_something(
    text1: &str,
    text2: &str,
    job_time: Duration,
) {
    info!("{text1} {text2}");
    thread::sleep(job_time);
}
