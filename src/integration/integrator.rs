use crate::objects::body::Body;

/// Advances a body's state by `dt` seconds: position moves along the
/// velocity, then the velocity decays exponentially by the body's per-second
/// damping factor. A zero `dt` leaves the body exactly unchanged for any
/// damping value.
pub fn integrate(body: &mut Body, dt: f64) {
    body.position += body.velocity * dt;
    body.velocity = body.velocity * body.damping.powf(dt);
}
