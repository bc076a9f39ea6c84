use crate::consts;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Star {
    pub x: f32,
    pub y: f32,
    pub size: f32,
    pub speed: f32,
}

/// Backdrop of slowly falling stars, in canvas units.
pub struct Starfield {
    stars: Vec<Star>,
    rng: fastrand::Rng,
}

impl Starfield {
    pub fn new(count: usize, mut rng: fastrand::Rng) -> Self {
        let stars = (0..count)
            .map(|_| Star {
                x: rng.f32() * consts::CANVAS_SIZE,
                y: rng.f32() * consts::CANVAS_SIZE,
                size: 1.0 + rng.f32() * 2.0,
                speed: 0.2 + rng.f32() * 0.8,
            })
            .collect();

        Self { stars, rng }
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    /// Moves every star down by its speed; stars leaving the bottom come back
    /// at the top in a fresh column.
    pub fn step(&mut self) {
        for star in &mut self.stars {
            star.y += star.speed;
            if star.y > consts::CANVAS_SIZE {
                star.y = 0.0;
                star.x = self.rng.f32() * consts::CANVAS_SIZE;
            }
        }
    }
}

impl Default for Starfield {
    fn default() -> Self {
        Self::new(consts::STAR_COUNT, fastrand::Rng::new())
    }
}
