// Ray-sphere picking against the scene contents: hit ordering, tags, the
// parallax offset, and the deterministic star scatter.

use folio_core::{ray_sphere, SceneContents};
use glam::Vec3;

#[test]
fn ray_sphere_intersection_basic() {
    let ray_origin = Vec3::ZERO;
    let ray_dir = Vec3::new(0.0, 0.0, 1.0);
    let center = Vec3::new(0.0, 0.0, 5.0);

    let result = ray_sphere(ray_origin, ray_dir, center, 2.0);
    assert!(result.is_some());
    let t = result.unwrap();
    assert!(t > 0.0);
    assert!(t < 10.0);
}

#[test]
fn ray_sphere_intersection_miss() {
    let ray_origin = Vec3::ZERO;
    let ray_dir = Vec3::new(1.0, 0.0, 0.0);
    let center = Vec3::new(0.0, 0.0, 5.0);

    assert!(ray_sphere(ray_origin, ray_dir, center, 2.0).is_none());
}

#[test]
fn ray_sphere_behind_origin_is_rejected() {
    let ray_origin = Vec3::ZERO;
    let ray_dir = Vec3::new(0.0, 0.0, 1.0);
    let center = Vec3::new(0.0, 0.0, -5.0);

    assert!(ray_sphere(ray_origin, ray_dir, center, 2.0).is_none());
}

#[test]
fn hits_are_ordered_nearest_first() {
    let mut scene = SceneContents::default();
    // insert far object first so ordering cannot come from insertion order
    let far = scene.add_decor(Vec3::new(0.0, 0.0, -1.0), 0.2, [1.0, 1.0, 1.0]);
    let near = scene.add_marker("near", Vec3::new(0.0, 0.0, 1.0), 0.2);

    let hits = scene.intersect_all(Vec3::new(0.0, 0.0, 2.5), Vec3::new(0.0, 0.0, -1.0), Vec3::ZERO);
    assert_eq!(hits.len(), 2);
    assert_eq!(hits[0].object, near);
    assert_eq!(hits[1].object, far);
    assert!(hits[0].distance < hits[1].distance);
}

#[test]
fn markers_carry_their_tag_and_decor_does_not() {
    let mut scene = SceneContents::default();
    let marker = scene.add_marker("GitHub", Vec3::ZERO, 0.1);
    let star = scene.add_decor(Vec3::new(3.0, 0.0, 0.0), 0.1, [1.0, 0.5, 0.2]);

    assert_eq!(scene.objects[marker].tag.as_deref(), Some("GitHub"));
    assert!(scene.objects[star].tag.is_none());
}

#[test]
fn scene_offset_moves_objects_under_the_ray() {
    let mut scene = SceneContents::default();
    scene.add_marker("GitHub", Vec3::new(1.0, 0.0, 0.0), 0.1);

    let ro = Vec3::new(0.0, 0.0, 2.5);
    let rd = Vec3::new(0.0, 0.0, -1.0);
    assert!(scene.intersect_all(ro, rd, Vec3::ZERO).is_empty());
    // shifting the whole scene left by one unit brings the marker onto the ray
    let hits = scene.intersect_all(ro, rd, Vec3::new(-1.0, 0.0, 0.0));
    assert_eq!(hits.len(), 1);
}

#[test]
fn star_scatter_is_deterministic_per_seed() {
    let mut a = SceneContents::default();
    let mut b = SceneContents::default();
    a.scatter_stars(50, 7);
    b.scatter_stars(50, 7);

    assert_eq!(a.objects.len(), 50);
    for (oa, ob) in a.objects.iter().zip(b.objects.iter()) {
        assert_eq!(oa.center, ob.center);
        assert_eq!(oa.color_rgb, ob.color_rgb);
        assert!(oa.tag.is_none());
    }

    let mut c = SceneContents::default();
    c.scatter_stars(50, 8);
    assert!(a
        .objects
        .iter()
        .zip(c.objects.iter())
        .any(|(oa, oc)| oa.center != oc.center));
}
