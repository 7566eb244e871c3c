use core::fmt::Debug;

use fugit::MillisDurationU32;
use heapless::Vec;
use rtt_target::rprintln;
use thiserror::Error;

/// States of a task and the state it starts in
pub trait StateMachine {
    const NAME: &'static str;
    type State: Copy + Debug + PartialEq;
    const ENTRY: Self::State;
}

/// Transition function of a task over the shared context `C`
///
/// A tick runs to completion and must not wait on anything: every other
/// task sharing the base period is held up until it returns.
pub trait Tick<C>: StateMachine {
    fn tick(&mut self, state: Self::State, ctx: &mut C) -> Self::State;
}

/// Object-safe handle the scheduler dispatches through
pub trait Runnable<C> {
    fn run(&mut self, ctx: &mut C);
}

/// A state machine together with its current state
pub struct Task<M: StateMachine> {
    machine: M,
    state: M::State,
}

impl<M: StateMachine> Task<M> {
    pub fn new(machine: M) -> Self {
        Self {
            machine,
            state: M::ENTRY,
        }
    }

    pub fn state(&self) -> M::State {
        self.state
    }
}

impl<C, M: Tick<C>> Runnable<C> for Task<M> {
    fn run(&mut self, ctx: &mut C) {
        let next = self.machine.tick(self.state, ctx);
        if next != self.state {
            rprintln!("{}: {:?} -> {:?}", M::NAME, self.state, next);
        }
        self.state = next;
    }
}

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum SchedulerError {
    #[error("task table is full")]
    Full,
    #[error("period {0} ms is not a non-zero multiple of the base tick")]
    InvalidPeriod(u32),
}

/// Scheduling record of one task
pub struct TaskDescriptor<'a, C> {
    period: MillisDurationU32,
    elapsed: MillisDurationU32,
    task: &'a mut dyn Runnable<C>,
}

impl<C> TaskDescriptor<'_, C> {
    pub fn period(&self) -> MillisDurationU32 {
        self.period
    }

    pub fn elapsed(&self) -> MillisDurationU32 {
        self.elapsed
    }
}

/// Fixed-rate cooperative dispatcher for up to `N` tasks
///
/// [`Scheduler::tick_all`] must be called exactly once per base period; it
/// does not catch up on missed periods.
pub struct Scheduler<'a, C, const N: usize> {
    base: MillisDurationU32,
    tasks: Vec<TaskDescriptor<'a, C>, N>,
}

impl<'a, C, const N: usize> Scheduler<'a, C, N> {
    pub fn new(base: MillisDurationU32) -> Self {
        Self {
            base,
            tasks: Vec::new(),
        }
    }

    pub fn base_period(&self) -> MillisDurationU32 {
        self.base
    }

    pub fn tasks(&self) -> &[TaskDescriptor<'a, C>] {
        &self.tasks
    }

    /// Register a task to run every `period`, returning its id
    ///
    /// A new task is due on the very first tick.
    pub fn add(
        &mut self,
        period: MillisDurationU32,
        task: &'a mut dyn Runnable<C>,
    ) -> Result<usize, SchedulerError> {
        let base = self.base.ticks();
        if period.ticks() == 0 || base == 0 || period.ticks() % base != 0 {
            return Err(SchedulerError::InvalidPeriod(period.ticks()));
        }
        let id = self.tasks.len();
        self.tasks
            .push(TaskDescriptor {
                period,
                elapsed: period,
                task,
            })
            .map_err(|_| SchedulerError::Full)?;
        rprintln!("Task {} every {} ms", id, period.ticks());
        Ok(id)
    }

    /// Run every task that is due, in registration order
    pub fn tick_all(&mut self, ctx: &mut C) {
        for (_task_id, descriptor) in self.tasks.iter_mut().enumerate() {
            if descriptor.elapsed == descriptor.period {
                #[cfg(feature = "trace-scheduler")]
                rprintln!("Running task {}", _task_id);
                descriptor.task.run(ctx);
                descriptor.elapsed = MillisDurationU32::from_ticks(0);
            }
            descriptor.elapsed += self.base;
        }
    }
}

/// Largest period that divides every task period
pub fn gcd_period(periods: &[MillisDurationU32]) -> Option<MillisDurationU32> {
    fn gcd(a: u32, b: u32) -> u32 {
        if b == 0 {
            a
        } else {
            gcd(b, a % b)
        }
    }

    let ticks = periods.iter().map(|p| p.ticks()).fold(0, gcd);
    (ticks != 0).then(|| MillisDurationU32::from_ticks(ticks))
}
