use glam::Vec3;

/// A ray in world space
#[derive(Debug, Clone, Copy)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    /// Point at distance `t` along the ray
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }
}

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    pub fn from_center_half_extents(center: Vec3, half: Vec3) -> Self {
        Self {
            min: center - half,
            max: center + half,
        }
    }

    /// Center of the bounding box
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    pub fn contains(&self, p: Vec3) -> bool {
        p.cmpge(self.min).all() && p.cmple(self.max).all()
    }
}

/// Ray-AABB intersection using the slab method.
/// Returns the distance along the ray to the nearest hit, or None.
pub fn ray_aabb(ray: &Ray, aabb: &Aabb) -> Option<f32> {
    let inv_dir = Vec3::new(
        1.0 / ray.direction.x,
        1.0 / ray.direction.y,
        1.0 / ray.direction.z,
    );

    let t1 = (aabb.min.x - ray.origin.x) * inv_dir.x;
    let t2 = (aabb.max.x - ray.origin.x) * inv_dir.x;
    let t3 = (aabb.min.y - ray.origin.y) * inv_dir.y;
    let t4 = (aabb.max.y - ray.origin.y) * inv_dir.y;
    let t5 = (aabb.min.z - ray.origin.z) * inv_dir.z;
    let t6 = (aabb.max.z - ray.origin.z) * inv_dir.z;

    let tmin = t1.min(t2).max(t3.min(t4)).max(t5.min(t6));
    let tmax = t1.max(t2).min(t3.max(t4)).min(t5.max(t6));

    if tmax < 0.0 || tmin > tmax {
        return None;
    }

    Some(if tmin < 0.0 { tmax } else { tmin })
}

/// Pick the nearest object whose AABB is intersected by the ray.
pub fn pick_nearest<'a, K: Clone + 'a>(
    ray: &Ray,
    boxes: impl IntoIterator<Item = (&'a K, &'a Aabb)>,
) -> Option<K> {
    let mut best: Option<(&K, f32)> = None;

    for (id, aabb) in boxes {
        if let Some(dist) = ray_aabb(ray, aabb) {
            if best.is_none_or(|(_, d)| dist < d) {
                best = Some((id, dist));
            }
        }
    }

    best.map(|(id, _)| id.clone())
}

/// Intersect the ray with the ground plane (y = 0) inside a square of the
/// given half extent around the origin.
pub fn ray_ground(ray: &Ray, half_extent: f32) -> Option<Vec3> {
    if ray.direction.y.abs() < 1e-6 {
        return None;
    }
    let t = -ray.origin.y / ray.direction.y;
    if t < 0.0 {
        return None;
    }
    let hit = ray.at(t);
    if hit.x.abs() > half_extent || hit.z.abs() > half_extent {
        return None;
    }
    Some(Vec3::new(hit.x, 0.0, hit.z))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn down_ray(x: f32, z: f32) -> Ray {
        Ray {
            origin: Vec3::new(x, 50.0, z),
            direction: Vec3::NEG_Y,
        }
    }

    fn unit_box(center: Vec3) -> Aabb {
        Aabb::from_center_half_extents(center, Vec3::splat(0.5))
    }

    #[test]
    fn test_ray_hits_box() {
        let d = ray_aabb(&down_ray(0.0, 0.0), &unit_box(Vec3::new(0.0, 0.5, 0.0)));
        assert!((d.unwrap() - 49.0).abs() < 1e-4);
    }

    #[test]
    fn test_ray_misses_box() {
        assert!(ray_aabb(&down_ray(3.0, 0.0), &unit_box(Vec3::ZERO)).is_none());
    }

    #[test]
    fn test_box_behind_ray() {
        let ray = Ray {
            origin: Vec3::new(0.0, 5.0, 0.0),
            direction: Vec3::Y,
        };
        assert!(ray_aabb(&ray, &unit_box(Vec3::ZERO)).is_none());
    }

    #[test]
    fn test_pick_nearest_prefers_closer() {
        let mut boxes = HashMap::new();
        boxes.insert("low".to_string(), unit_box(Vec3::new(0.0, 0.5, 0.0)));
        boxes.insert("tall".to_string(), Aabb::from_center_half_extents(
            Vec3::new(0.0, 2.0, 0.0),
            Vec3::new(0.3, 2.0, 0.3),
        ));
        boxes.insert("far".to_string(), unit_box(Vec3::new(5.0, 0.5, 5.0)));

        let hit = pick_nearest(&down_ray(0.0, 0.0), &boxes);
        assert_eq!(hit.as_deref(), Some("tall"));
        assert!(pick_nearest(&down_ray(-8.0, 0.0), &boxes).is_none());
    }

    #[test]
    fn test_ray_ground() {
        let ray = Ray {
            origin: Vec3::new(0.0, 10.0, 0.0),
            direction: Vec3::new(1.0, -1.0, 0.0).normalize(),
        };
        let hit = ray_ground(&ray, 15.0).unwrap();
        assert!((hit.x - 10.0).abs() < 1e-4);
        assert_eq!(hit.y, 0.0);
    }

    #[test]
    fn test_ray_ground_outside_garden() {
        assert!(ray_ground(&down_ray(20.0, 0.0), 15.0).is_none());
        let parallel = Ray {
            origin: Vec3::new(0.0, 1.0, 0.0),
            direction: Vec3::X,
        };
        assert!(ray_ground(&parallel, 15.0).is_none());
    }

    #[test]
    fn test_aabb_contains() {
        let b = unit_box(Vec3::ZERO);
        assert!(b.contains(Vec3::new(0.2, -0.4, 0.5)));
        assert!(!b.contains(Vec3::new(0.6, 0.0, 0.0)));
        assert_eq!(b.center(), Vec3::ZERO);
    }
}
