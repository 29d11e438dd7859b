use governor::{
    clock::{Clock, DefaultClock},
    state::{InMemoryState, NotKeyed},
    Quota, RateLimiter,
};
use std::cell::Cell;
use std::num::NonZeroU32;
use std::thread;
use std::time::Duration;

/// Blocks the caller until the underlying quota allows another request.
/// A pacer built from a zero period never waits.
pub struct RequestPacer {
    limiter: Option<RateLimiter<NotKeyed, InMemoryState, DefaultClock>>,
    clock: DefaultClock,
}

impl RequestPacer {
    pub fn per_second(requests: u32) -> Self {
        let limiter = NonZeroU32::new(requests)
            .map(Quota::per_second)
            .map(RateLimiter::direct);
        RequestPacer {
            limiter,
            clock: DefaultClock::default(),
        }
    }

    /// One request per `period`, used as the fixed courtesy delay.
    pub fn with_period(period: Duration) -> Self {
        let limiter = Quota::with_period(period).map(RateLimiter::direct);
        RequestPacer {
            limiter,
            clock: DefaultClock::default(),
        }
    }

    pub fn wait(&self) {
        if let Some(limiter) = &self.limiter {
            while let Err(not_until) = limiter.check() {
                thread::sleep(not_until.wait_time_from(self.clock.now()));
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Account,
    Summoner,
    MatchList,
    MatchDetail,
}

/// Per-run request counters. Nothing here outlives the process.
#[derive(Debug, Default)]
pub struct RequestLog {
    account: Cell<u32>,
    summoner: Cell<u32>,
    match_list: Cell<u32>,
    match_detail: Cell<u32>,
    not_found: Cell<u32>,
}

impl RequestLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_request(&self, endpoint: Endpoint) {
        let counter = match endpoint {
            Endpoint::Account => &self.account,
            Endpoint::Summoner => &self.summoner,
            Endpoint::MatchList => &self.match_list,
            Endpoint::MatchDetail => &self.match_detail,
        };
        counter.set(counter.get() + 1);
    }

    pub fn record_not_found(&self) {
        self.not_found.set(self.not_found.get() + 1);
    }

    pub fn count(&self, endpoint: Endpoint) -> u32 {
        match endpoint {
            Endpoint::Account => self.account.get(),
            Endpoint::Summoner => self.summoner.get(),
            Endpoint::MatchList => self.match_list.get(),
            Endpoint::MatchDetail => self.match_detail.get(),
        }
    }

    pub fn total(&self) -> u32 {
        [
            Endpoint::Account,
            Endpoint::Summoner,
            Endpoint::MatchList,
            Endpoint::MatchDetail,
        ]
        .iter()
        .map(|endpoint| self.count(*endpoint))
        .sum()
    }

    pub fn display_status(&self) {
        println!("\n📊 API Usage (this run)");
        println!("   Account lookups:  {}", self.count(Endpoint::Account));
        println!("   Summoner lookups: {}", self.count(Endpoint::Summoner));
        println!("   Match lists:      {}", self.count(Endpoint::MatchList));
        println!("   Match details:    {}", self.count(Endpoint::MatchDetail));
        println!("   Not found (404):  {}", self.not_found.get());
        println!("   Total: {} requests\n", self.total());
    }
}
