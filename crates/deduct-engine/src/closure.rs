//! Forward-chaining closure
//!
//! A run goes through five phases:
//!
//! 1. `Initializing`: error descriptions left by an earlier run are set
//!    aside, container indices are collected and the profile inspects the
//!    input graph.
//! 2. `AxiomInjection`: vocabulary and container axioms, literal proxy
//!    substitution, datatype axioms and the one-time rules.
//! 3. `Cycling`: every triple of the graph is handed to the profile's rules;
//!    the new conclusions are merged at the end of the cycle. The phase ends
//!    with the first cycle that adds nothing.
//! 4. `Restoring`: proxies are mapped back to their literals and the
//!    profile's final checks run.
//! 5. `Done`: the set-aside descriptions are put back and the newly recorded
//!    inconsistencies are written into the graph.

use crate::axioms::{container_axioms, max_member_index, member_indices};
use crate::config::ClosureConfig;
use crate::errors::{materialize, set_aside};
use crate::profile::ProfileKind;
use crate::report::ClosureReport;
use crate::{proxy, ClosureError};
use chrono::{DateTime, Utc};
use deduct_core::model::Triple;
use deduct_core::store::TripleStore;
use deduct_rules::{check_axioms, ErrorSink, LiteralProxies, RuleContext, RuleProfile};
use std::collections::{BTreeSet, HashSet};
use std::time::Instant;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Initializing,
    AxiomInjection,
    Cycling,
    Restoring,
    Done,
}

/// Deductive closure of a graph under one of the built-in profiles
#[derive(Debug, Clone)]
pub struct DeductiveClosure {
    kind: ProfileKind,
    config: ClosureConfig,
}

impl DeductiveClosure {
    pub fn new(kind: ProfileKind, config: ClosureConfig) -> Self {
        Self { kind, config }
    }

    pub fn kind(&self) -> ProfileKind {
        self.kind
    }

    pub fn config(&self) -> &ClosureConfig {
        &self.config
    }

    /// Prepare a run over `graph` without doing any work yet
    pub fn start<'g>(&self, graph: &'g mut TripleStore) -> ClosureRun<'g> {
        ClosureRun::new(self.kind.build(), self.config.clone(), graph)
    }

    /// Expand `graph` in place to its closure
    pub fn expand(&self, graph: &mut TripleStore) -> Result<ClosureReport, ClosureError> {
        let mut run = self.start(graph);
        run.saturate()?;
        run.finish()
    }
}

/// One closure run over a borrowed graph
pub struct ClosureRun<'g> {
    profile: Box<dyn RuleProfile>,
    config: ClosureConfig,
    graph: &'g mut TripleStore,
    proxies: LiteralProxies,
    errors: ErrorSink,
    phase: Phase,
    cycles: usize,
    initial_triples: usize,
    member_indices: BTreeSet<usize>,
    /// Error descriptions kept out of the rules until `Done`
    set_aside: Vec<Triple>,
    /// Cycle count at which `max_cycles` stopped the run
    gave_up_at: Option<usize>,
    started_at: DateTime<Utc>,
    timer: Instant,
}

impl<'g> ClosureRun<'g> {
    /// A run with any profile, built-in or not
    pub fn new(profile: Box<dyn RuleProfile>, config: ClosureConfig, graph: &'g mut TripleStore) -> Self {
        Self {
            profile,
            config,
            initial_triples: graph.len(),
            graph,
            proxies: LiteralProxies::new(),
            errors: ErrorSink::new(),
            phase: Phase::Initializing,
            cycles: 0,
            member_indices: BTreeSet::new(),
            set_aside: Vec::new(),
            gave_up_at: None,
            started_at: Utc::now(),
            timer: Instant::now(),
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Rule cycles completed so far
    pub fn cycles(&self) -> usize {
        self.cycles
    }

    /// Inconsistencies recorded so far, in order
    pub fn errors(&self) -> &[String] {
        self.errors.messages()
    }

    /// The graph in its current state; literals are proxied while cycling
    pub fn graph(&self) -> &TripleStore {
        &*self.graph
    }

    pub fn proxies(&self) -> &LiteralProxies {
        &self.proxies
    }

    /// Run the cycles up to the fixpoint.
    ///
    /// Returns at once if the fixpoint was already reached. When the cycle
    /// limit is hit the literals are restored, the run is over and every
    /// further call returns the same error.
    pub fn saturate(&mut self) -> Result<(), ClosureError> {
        if let Some(cycles) = self.gave_up_at {
            return Err(ClosureError::DidNotConverge { cycles });
        }
        if self.phase == Phase::Initializing {
            self.initialize();
        }
        if self.phase == Phase::AxiomInjection {
            if let Err(error) = self.inject_axioms() {
                self.graph.extend(std::mem::take(&mut self.set_aside));
                return Err(error);
            }
        }
        while self.phase == Phase::Cycling {
            self.cycle()?;
        }
        Ok(())
    }

    /// Restore the literals, run the final checks and write the
    /// inconsistencies into the graph.
    pub fn finish(mut self) -> Result<ClosureReport, ClosureError> {
        self.saturate()?;
        if self.phase == Phase::Restoring {
            self.restore();
            self.graph.extend(std::mem::take(&mut self.set_aside));
            let written = materialize(self.graph, self.errors.messages());
            debug!(written, "inconsistencies written");
            self.phase = Phase::Done;
        }

        let report = ClosureReport {
            profile: self.profile.name().to_string(),
            cycles: self.cycles,
            initial_triples: self.initial_triples,
            final_triples: self.graph.len(),
            max_member_index: max_member_index(&self.member_indices),
            literals: self.proxies.len(),
            errors: self.errors.into_messages(),
            started_at: self.started_at,
            completed_at: Utc::now(),
            execution_time_ms: self.timer.elapsed().as_millis() as u64,
        };
        info!(
            profile = %report.profile,
            cycles = report.cycles,
            triples = report.final_triples,
            errors = report.errors.len(),
            "Closure complete"
        );
        Ok(report)
    }

    fn initialize(&mut self) {
        info!(profile = self.profile.name(), triples = self.graph.len(), "Starting closure");
        self.set_aside = set_aside(self.graph);
        if !self.set_aside.is_empty() {
            debug!(triples = self.set_aside.len(), "earlier error descriptions set aside");
        }
        self.member_indices = member_indices(self.graph);
        self.profile.pre_process(self.graph, &mut self.errors);
        self.phase = Phase::AxiomInjection;
    }

    fn inject_axioms(&mut self) -> Result<(), ClosureError> {
        let name = self.profile.name();
        if self.config.axioms {
            let axioms = self.profile.axioms();
            check_axioms(name, &axioms)?;
            let vocabulary = self.graph.extend(axioms);
            let containers = self.graph.extend(container_axioms(&self.member_indices));
            debug!(vocabulary, containers, "axioms added");
        }

        self.proxies = proxy::substitute(self.graph);

        if self.config.datatype_axioms {
            let axioms = {
                let mut ctx = RuleContext::new(&*self.graph, &self.proxies, &mut self.errors);
                self.profile.datatype_axioms(&mut ctx)
            };
            check_axioms(name, &axioms)?;
            let added = self.graph.extend(axioms);
            debug!(added, "datatype axioms added");
        }

        let derived = {
            let mut ctx = RuleContext::new(&*self.graph, &self.proxies, &mut self.errors);
            self.profile.one_time_rules(&mut ctx)
        };
        let added = self.graph.extend(derived.into_iter().filter(Triple::is_well_formed));
        debug!(added, "one-time rules applied");

        self.phase = Phase::Cycling;
        Ok(())
    }

    fn cycle(&mut self) -> Result<(), ClosureError> {
        let cycle = self.cycles + 1;
        let mut buffer = Vec::new();
        {
            let graph = &*self.graph;
            let mut seen = HashSet::new();
            let mut ctx = RuleContext::new(graph, &self.proxies, &mut self.errors);
            for triple in graph.iter() {
                for candidate in self.profile.rules(triple, cycle, &mut ctx) {
                    if candidate.is_well_formed() && !graph.contains(&candidate) && seen.insert(candidate.clone()) {
                        buffer.push(candidate);
                    }
                }
            }
        }
        self.cycles = cycle;
        let added = self.graph.extend(buffer);
        debug!(cycle, added, errors = self.errors.len(), "cycle complete");

        if added == 0 {
            self.phase = Phase::Restoring;
            return Ok(());
        }
        if self.config.max_cycles.is_some_and(|max| cycle >= max) {
            warn!(cycles = cycle, "no fixpoint within the cycle limit");
            proxy::restore(self.graph, &self.proxies);
            self.graph.extend(std::mem::take(&mut self.set_aside));
            self.gave_up_at = Some(cycle);
            self.phase = Phase::Done;
            return Err(ClosureError::DidNotConverge { cycles: cycle });
        }
        Ok(())
    }

    fn restore(&mut self) {
        let dropped = proxy::restore(self.graph, &self.proxies);
        let checked = self.profile.post_process(self.graph, &mut self.errors);
        let added = self.graph.extend(checked.into_iter().filter(Triple::is_well_formed));
        debug!(dropped, added, "literals restored");
    }
}
