use crate::collision::broad::check_broad;
use crate::collision::detection::check_narrow;
use crate::integration::integrator;
use crate::math::vec2::Vec2;
use crate::objects::body::Body;
use crate::world::config::SimulationConfig;

/// Collaborator callbacks invoked by the step driver.
///
/// Both run synchronously on the stepping thread and may mutate body state
/// in place; later pairs within the same substep observe those mutations.
pub trait SimulationHooks {
    /// Called once per body per substep, before that body's pairwise scan.
    /// `substep` and `last_substep` let collaborators gate once-per-frame
    /// behavior without the driver knowing their semantics.
    fn update_body(&mut self, body: &mut Body, dt: f64, substep: usize, last_substep: usize) {
        let _ = (body, dt, substep, last_substep);
    }

    /// Called once per ordered pair per substep when the pair collides:
    /// first as `(a, b, normal_into_a, normal_into_b)`, then with the roles
    /// reversed, so each body reacts from its own frame of reference.
    fn on_collision(
        &mut self,
        body: &mut Body,
        other: &mut Body,
        my_normal: Option<Vec2>,
        other_normal: Option<Vec2>,
    ) {
        let _ = (body, other, my_normal, other_normal);
    }
}

/// Fixed-timestep simulation driver.
///
/// Owns the simulation set for the duration of a step. A step always runs
/// to completion on the calling thread; there is no persistent state beyond
/// the body list between steps.
#[derive(Debug, Default)]
pub struct Simulation {
    pub bodies: Vec<Body>,
    pub config: SimulationConfig,
}

impl Simulation {
    pub fn new() -> Self {
        Self::with_config(SimulationConfig::default())
    }

    pub fn with_config(config: SimulationConfig) -> Self {
        Self {
            bodies: Vec::new(),
            config,
        }
    }

    /// Adds a body to the simulation set and returns its index.
    pub fn add_body(&mut self, body: Body) -> usize {
        let index = self.bodies.len();
        self.bodies.push(body);
        index
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Advances the simulation by `wall_clock_delta` seconds, split into
    /// fixed substeps of `config.substep_duration`. Returns the number of
    /// substeps that ran (zero for a non-positive delta).
    pub fn step<H: SimulationHooks>(&mut self, wall_clock_delta: f64, hooks: &mut H) -> usize {
        let dt = self.config.substep_duration;
        if wall_clock_delta <= 0.0 || dt <= 0.0 {
            return 0;
        }

        let num_substeps = (wall_clock_delta / dt).ceil() as usize;
        log::trace!(
            "step: {num_substeps} substeps of {dt}s for {wall_clock_delta}s elapsed"
        );
        for substep in 0..num_substeps {
            self.run_substep(dt, substep, num_substeps - 1, hooks);
        }
        num_substeps
    }

    /// One substep: per body in insertion order, the gameplay update, the
    /// integrator, then the pairwise scan against every later body. When
    /// pair (i, j) is tested, body i has already moved this substep and
    /// body j has not; later pairs likewise observe any state changes made
    /// by earlier collision callbacks.
    fn run_substep<H: SimulationHooks>(
        &mut self,
        dt: f64,
        substep: usize,
        last_substep: usize,
        hooks: &mut H,
    ) {
        for i in 0..self.bodies.len() {
            {
                let body = &mut self.bodies[i];
                hooks.update_body(body, dt, substep, last_substep);
                integrator::integrate(body, dt);
            }

            for j in (i + 1)..self.bodies.len() {
                let info = {
                    let a = &self.bodies[i];
                    let b = &self.bodies[j];
                    if !(a.collides && b.collides) {
                        continue;
                    }
                    if !check_broad(a.position, a.hitbox.as_ref(), b.position, b.hitbox.as_ref())
                    {
                        continue;
                    }
                    let (Some(hitbox_a), Some(hitbox_b)) = (a.hitbox.as_ref(), b.hitbox.as_ref())
                    else {
                        continue;
                    };
                    check_narrow(
                        a.position,
                        a.rotation,
                        hitbox_a,
                        b.position,
                        b.rotation,
                        hitbox_b,
                    )
                };

                if info.does_collide {
                    // Both orderings, so each body reacts in its own frame.
                    let (head, tail) = self.bodies.split_at_mut(j);
                    let a = &mut head[i];
                    let b = &mut tail[0];
                    hooks.on_collision(a, b, info.normal_into_a, info.normal_into_b);
                    hooks.on_collision(b, a, info.normal_into_b, info.normal_into_a);
                }
            }
        }

        // Deferred removal: bodies flagged during the scan leave the set
        // only once the whole substep has finished.
        let before = self.bodies.len();
        self.bodies.retain(|body| !body.marked_for_removal);
        let removed = before - self.bodies.len();
        if removed > 0 {
            log::debug!("substep {substep}: removed {removed} bodies");
        }
    }
}
