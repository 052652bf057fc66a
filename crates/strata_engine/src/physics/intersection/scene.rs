use log::trace;

use super::{Intersect, Intersection, Primitive, Ray};
use crate::foundation::math::Scalar;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// An ordered collection of primitives traced together
#[derive(Debug, Clone, PartialEq)]
pub struct Scene<T: Scalar = f32> {
    primitives: Vec<Primitive<T>>,
}

impl<T: Scalar> Scene<T> {
    /// Empty scene
    pub const fn new() -> Self {
        Self {
            primitives: Vec::new(),
        }
    }

    /// Add a primitive
    pub fn push(&mut self, primitive: impl Into<Primitive<T>>) -> &mut Self {
        self.primitives.push(primitive.into());
        self
    }

    /// Primitives in insertion order
    pub fn primitives(&self) -> &[Primitive<T>] {
        &self.primitives
    }

    /// Number of primitives
    pub fn len(&self) -> usize {
        self.primitives.len()
    }

    /// Whether the scene has no primitives
    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }

    /// Nearest hit in front of the ray origin
    ///
    /// Each primitive contributes its first crossing at or in front of the
    /// origin ([`Intersect::intersect_forward`]), so a primitive enclosing the
    /// origin reports where the ray leaves it. Ties go to the primitive added
    /// first.
    pub fn closest_hit(&self, ray: &Ray<T>) -> Intersection<T> {
        self.closest_primitive(ray)
            .map_or_else(Intersection::miss, |(_, hit)| hit)
    }

    /// Like [`Scene::closest_hit`], also returning the primitive that was hit
    pub fn closest_primitive(&self, ray: &Ray<T>) -> Option<(&Primitive<T>, Intersection<T>)> {
        self.hits_in_front(ray)
            .into_iter()
            .next()
            .map(|(index, hit)| (&self.primitives[index], hit))
    }

    /// Nearest hit, colored by every primitive along the ray
    ///
    /// The hits in front of the origin are visited front to back; each one
    /// is re-evaluated with a ray carrying the color accumulated so far, so
    /// the result is `ray.color` plus the color of every primitive the ray
    /// passes through.
    pub fn layered_hit(&self, ray: &Ray<T>) -> Intersection<T> {
        let hits = self.hits_in_front(ray);
        let Some(&(_, nearest)) = hits.first() else {
            return Intersection::miss();
        };

        let color = hits.iter().fold(ray.color, |color, &(index, _)| {
            self.primitives[index].intersect_forward(&ray.with_color(color)).color
        });
        trace!("Layered {} hits along ray from {}", hits.len(), ray.origin);

        Intersection { color, ..nearest }
    }

    /// Closest hit for each ray, in input order
    pub fn intersect_batch(&self, rays: &[Ray<T>]) -> Vec<Intersection<T>> {
        trace!("Tracing batch of {} rays against {} primitives", rays.len(), self.len());

        #[cfg(feature = "parallel")]
        {
            rays.par_iter().map(|ray| self.closest_hit(ray)).collect()
        }

        #[cfg(not(feature = "parallel"))]
        {
            rays.iter().map(|ray| self.closest_hit(ray)).collect()
        }
    }

    /// Forward hits, nearest first, paired with the primitive index
    fn hits_in_front(&self, ray: &Ray<T>) -> Vec<(usize, Intersection<T>)> {
        let mut hits: Vec<_> = self
            .primitives
            .iter()
            .map(|primitive| primitive.intersect_forward(ray))
            .enumerate()
            .filter(|(_, info)| info.hit)
            .collect();
        // stable sort keeps insertion order for equal distances
        hits.sort_by(|(_, a), (_, b)| a.distance.to_f64().total_cmp(&b.distance.to_f64()));
        hits
    }
}

impl<T: Scalar> Default for Scene<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Scalar> FromIterator<Primitive<T>> for Scene<T> {
    fn from_iter<I: IntoIterator<Item = Primitive<T>>>(iter: I) -> Self {
        Self {
            primitives: iter.into_iter().collect(),
        }
    }
}
