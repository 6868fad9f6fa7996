use toruslife::builder::GridBuilder;
use toruslife::camera::Camera;
use toruslife::camera::draw_field;
use toruslife::field::Field;
use toruslife::pattern;

#[test]
fn a_fresh_camera_renders_blank() {
    let mut cam = Camera::new(8, 8);

    assert!(cam.render().chars().all(|c| c == '\u{2800}' || c == '\n'));
}

#[test]
fn a_pixel_lands_on_its_braille_dot() {
    let mut cam = Camera::new(8, 8);

    cam.draw_pixel(0, 0);

    // top-left dot of the top-left character
    assert!(cam.render().starts_with('\u{2801}'));
}

#[test]
fn glider_frame() {
    let mut builder = GridBuilder::new(16, 16);
    builder.stamp(&pattern::GLIDER, 4, 4).unwrap();

    let field = Field::new(&builder.build());
    let mut cam = Camera::new(16, 16);

    draw_field(&mut cam, &field);

    insta::assert_snapshot!(cam.render(), @r"
    ⠀⠀⠀⠀⠀⠀⠀⠀
    ⠀⠀⠢⠇⠀⠀⠀⠀
    ⠀⠀⠀⠀⠀⠀⠀⠀
    ⠀⠀⠀⠀⠀⠀⠀⠀
    ");
}
