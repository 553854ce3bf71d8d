//! The allocator: seats guests, supervises tables and drains the waiting queue.
//!
//! A run goes through three phases. In `Admitting`, [`Allocator::admit`] seats each
//! arriving guest at the first free table (ascending table id) or queues it. In
//! `Serving`, [`Allocator::serve`] polls every table once per pass, releases
//! tables whose guest has finished and immediately hands each freed table to the
//! head of the queue. When no table is occupied and the queue is empty the run is
//! `Drained`.

use crate::core::{
    Clock, DurationSource, EventSink, Guest, SeatingError, SeatingEvent, Table, TableId,
    TracingEventSink, UniformDurations, WaitingQueue,
};

/// Default supervisor polling interval, in time units.
pub const DEFAULT_POLL_INTERVAL: u64 = 1;

/// Phase of a seating run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Accepting arrivals.
    Admitting,
    /// Supervisor loop running.
    Serving,
    /// Every guest served; terminal.
    Drained,
}

/// Where every admitted guest currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Occupancy {
    /// Guests admitted so far.
    pub admitted: usize,
    /// Guests seated at a table.
    pub seated: usize,
    /// Guests in the waiting queue.
    pub waiting: usize,
    /// Guests who finished and left.
    pub finished: usize,
}

impl Occupancy {
    /// Every admitted guest is accounted for exactly once.
    #[must_use]
    pub const fn is_consistent(&self) -> bool {
        self.seated + self.waiting + self.finished == self.admitted
    }
}

/// Outcome of a completed [`Allocator::serve`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ServeReport {
    /// Number of table scans performed.
    pub passes: u64,
    /// Guests that finished during the run.
    pub served: usize,
    /// Clock time when the run drained.
    pub elapsed_units: u64,
}

/// Owner of the tables and the waiting queue for one run.
pub struct Allocator<Q, C> {
    tables: Vec<Table>,
    queue: Q,
    clock: C,
    durations: Box<dyn DurationSource>,
    sink: Box<dyn EventSink>,
    poll_interval: u64,
    phase: Phase,
    admitted: usize,
    finished: usize,
}

impl<Q, C> Allocator<Q, C>
where
    Q: WaitingQueue,
    C: Clock,
{
    /// Create an allocator over `tables`.
    ///
    /// Tables are scanned in ascending id regardless of the order given here.
    /// Durations default to a uniform `[3, 10]` draw and events go to `tracing`.
    ///
    /// # Errors
    ///
    /// Returns [`SeatingError::TableOccupied`] if a table already has a guest, or
    /// [`SeatingError::DuplicateTable`] if two tables share an id.
    pub fn new(mut tables: Vec<Table>, queue: Q, clock: C) -> Result<Self, SeatingError> {
        tables.sort_by_key(Table::id);
        if let Some((table, guest)) = tables
            .iter()
            .find_map(|t| t.occupant().map(|guest| (t.id(), guest)))
        {
            return Err(SeatingError::TableOccupied {
                table,
                occupant: guest.name().to_string(),
            });
        }
        if let Some(pair) = tables.windows(2).find(|w| w[0].id() == w[1].id()) {
            return Err(SeatingError::DuplicateTable(pair[0].id()));
        }
        Ok(Self {
            tables,
            queue,
            clock,
            durations: Box::new(UniformDurations::default()),
            sink: Box::new(TracingEventSink),
            poll_interval: DEFAULT_POLL_INTERVAL,
            phase: Phase::Admitting,
            admitted: 0,
            finished: 0,
        })
    }

    /// Attach an event sink.
    #[must_use]
    pub fn with_sink(mut self, sink: impl EventSink + 'static) -> Self {
        self.sink = Box::new(sink);
        self
    }

    /// Replace the duration source.
    #[must_use]
    pub fn with_durations(mut self, durations: impl DurationSource + 'static) -> Self {
        self.durations = Box::new(durations);
        self
    }

    pub(crate) fn with_boxed_parts(
        mut self,
        durations: Box<dyn DurationSource>,
        sink: Box<dyn EventSink>,
    ) -> Self {
        self.durations = durations;
        self.sink = sink;
        self
    }

    /// Set the supervisor polling interval; zero is treated as one unit.
    #[must_use]
    pub fn with_poll_interval(mut self, units: u64) -> Self {
        self.poll_interval = units.max(1);
        self
    }

    /// Current phase.
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Tables in scan order.
    pub fn tables(&self) -> &[Table] {
        &self.tables
    }

    /// Waiting queue.
    pub const fn queue(&self) -> &Q {
        &self.queue
    }

    /// Clock driving this run.
    pub const fn clock(&self) -> &C {
        &self.clock
    }

    /// Snapshot of where every admitted guest is.
    pub fn occupancy(&self) -> Occupancy {
        Occupancy {
            admitted: self.admitted,
            seated: self.tables.iter().filter(|t| !t.is_free()).count(),
            waiting: self.queue.len(),
            finished: self.finished,
        }
    }

    /// True when no table is occupied and nobody is waiting.
    pub fn is_drained(&self) -> bool {
        self.queue.is_empty() && self.tables.iter().all(Table::is_free)
    }

    /// Seat each guest at the first free table, or queue it, in arrival order.
    ///
    /// # Errors
    ///
    /// Returns [`SeatingError::Drained`] once the run has finished, or an
    /// invalid-state error if table bookkeeping is corrupt.
    pub fn admit<I>(&mut self, guests: I) -> Result<(), SeatingError>
    where
        I: IntoIterator<Item = Guest>,
    {
        if self.phase == Phase::Drained {
            return Err(SeatingError::Drained);
        }
        for guest in guests {
            self.admitted += 1;
            match self.tables.iter().position(Table::is_free) {
                Some(index) => {
                    let name = guest.name().to_string();
                    let table = self.seat(index, guest)?;
                    tracing::info!(guest = %name, table, "guest seated on arrival");
                    self.sink.record(SeatingEvent::Seated { guest: name, table });
                }
                None => {
                    let name = guest.name().to_string();
                    self.queue.enqueue(guest);
                    tracing::info!(guest = %name, waiting = self.queue.len(), "guest queued");
                    self.sink.record(SeatingEvent::Queued { guest: name });
                }
            }
        }
        debug_assert!(self.occupancy().is_consistent());
        Ok(())
    }

    /// Run the supervisor loop until every guest has been served.
    ///
    /// # Errors
    ///
    /// Returns [`SeatingError::NoTables`] if guests are waiting but there are no
    /// tables, [`SeatingError::Drained`] if called after the run finished, or an
    /// invalid-state error if bookkeeping is corrupt. Any error aborts the run.
    pub async fn serve(&mut self) -> Result<ServeReport, SeatingError> {
        if self.phase == Phase::Drained {
            return Err(SeatingError::Drained);
        }
        if self.tables.is_empty() && !self.queue.is_empty() {
            tracing::error!(waiting = self.queue.len(), "guests waiting but no tables exist");
            return Err(SeatingError::NoTables(self.queue.len()));
        }

        self.phase = Phase::Serving;
        let mut passes = 0;
        while !self.is_drained() {
            let reseated = self.sweep().inspect_err(|e| {
                tracing::error!("seating run aborted: {e}");
            })?;
            passes += 1;
            tracing::debug!(pass = passes, reseated, "table scan complete");
            debug_assert!(self.occupancy().is_consistent());
            if self.is_drained() {
                break;
            }
            self.clock.pause(self.poll_interval).await;
        }

        self.phase = Phase::Drained;
        self.sink.record(SeatingEvent::AllServed);
        let report = ServeReport {
            passes,
            served: self.finished,
            elapsed_units: self.clock.now(),
        };
        tracing::info!(
            served = report.served,
            passes = report.passes,
            elapsed = report.elapsed_units,
            "all guests served"
        );
        Ok(report)
    }

    /// One pass over every table in ascending id. Returns how many queued guests
    /// were seated.
    fn sweep(&mut self) -> Result<usize, SeatingError> {
        let mut reseated = 0;
        for index in 0..self.tables.len() {
            let finished = self.tables[index]
                .occupant()
                .is_some_and(Guest::is_finished);
            if !finished {
                continue;
            }

            let table = &mut self.tables[index];
            let table_id = table.id();
            let guest = table.release()?;
            self.finished += 1;
            tracing::info!(guest = %guest.name(), table = table_id, "guest departed");
            self.sink.record(SeatingEvent::Departed {
                guest: guest.name().to_string(),
                table: table_id,
            });

            if self.queue.is_empty() {
                continue;
            }
            let next = self.queue.dequeue()?;
            let name = next.name().to_string();
            self.seat(index, next)?;
            reseated += 1;
            tracing::info!(guest = %name, table = table_id, "guest seated from queue");
            self.sink.record(SeatingEvent::SeatedFromQueue {
                guest: name,
                table: table_id,
            });
        }
        Ok(reseated)
    }

    /// Assign `guest` to the table at `index` and start its timer.
    fn seat(&mut self, index: usize, guest: Guest) -> Result<TableId, SeatingError> {
        let Self {
            tables,
            clock,
            durations,
            ..
        } = self;
        let table = &mut tables[index];
        table.assign(guest)?;
        if let Some(guest) = table.occupant_mut() {
            guest.start(&mut **durations, &*clock)?;
        }
        Ok(table.id())
    }
}
