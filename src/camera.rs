use crate::field::Field;

/// Hex values of braille dots
///
/// ```text
///  1   8
///  2  10
///  4  20
/// 40  80
/// ```
///
/// Where the base blank pattern is codepoint `0x2800` (or U+2800)
///
/// To get other configurations, just add the numbers above.
const BRAILLE_EMPTY: u32 = 0x2800;

/// A terminal raster surface.
///
/// One automaton cell maps to one braille dot, so each terminal character
/// carries a 2x4 block of cells. The camera never touches engine state; it
/// only reads cells and accumulates them into a framebuffer string.
pub struct Camera {
    /// The cell buffer
    cb: Vec<bool>,

    /// The frame buffer.
    fb: String,

    /// Codepoints. This allows us to construct the framebuffer more easily
    cp: Vec<u32>,

    /// Width of the framebuffer
    w: usize,

    /// Height of the framebuffer
    h: usize,
}

impl Camera {
    pub fn new(w: usize, h: usize) -> Self {
        let cb = vec![false; w * h];

        // Each braille character is 3 bytes in utf-8, and each of the `bh`
        // framebuffer lines ends in a 1 byte newline.
        let (bw, bh) = (w.div_ceil(2), h.div_ceil(4));
        let cp = vec![BRAILLE_EMPTY; bw * bh];

        let mut fb = String::with_capacity(3 * (bw * bh) + bh);
        for (i, &c) in cp.iter().enumerate() {
            if i > 0 && i % bw == 0 {
                fb.push('\n');
            }

            fb.push(::std::char::from_u32(c).unwrap());
        }
        fb.push('\n');

        Self { cb, fb, cp, w, h }
    }

    pub fn width(&self) -> usize {
        self.w
    }

    pub fn height(&self) -> usize {
        self.h
    }

    /// Turns on a single pixel of the framebuffer
    pub fn draw_pixel(&mut self, x: usize, y: usize) {
        assert!(x < self.w, "x is out of bounds");
        assert!(y < self.h, "y is out of bounds");

        let i = self.xy_from(x, y);

        self.cb[i] = true;
    }

    /// Turns on the one pixel border of the framebuffer, framing the torus
    /// the way the original grid overlay framed the window.
    pub fn draw_outline(&mut self) {
        for x in 0..self.w {
            let i = self.xy_from(x, 0);
            let j = self.xy_from(x, self.h - 1);

            self.cb[i] = true;
            self.cb[j] = true;
        }

        for y in 0..self.h {
            let i = self.xy_from(0, y);
            let j = self.xy_from(self.w - 1, y);

            self.cb[i] = true;
            self.cb[j] = true;
        }
    }

    /// Reset the cell buffer
    pub fn reset(&mut self) {
        self.cb.fill(false);
    }

    /// Fundamentally, we have a framebuffer of every pixel on our screen, and
    /// we ask ourselves "Is this pixel on or off?". Each lit pixel adds its
    /// dot to the braille character covering it.
    pub fn render(&mut self) -> &str {
        let bw = self.w.div_ceil(2);

        // compute new codepoints
        self.cp.fill(BRAILLE_EMPTY);

        for (n, &px) in self.cb.iter().enumerate() {
            let (x, y) = self.xy_to(n);
            let hex = Self::get_hex_value(x, y);

            if px {
                self.cp[(y / 4) * bw + (x / 2)] += hex;
            }
        }

        // update framebuffer
        self.fb.clear();

        for (i, &c) in self.cp.iter().enumerate() {
            if i > 0 && i % bw == 0 {
                self.fb.push('\n');
            }

            self.fb.push(::std::char::from_u32(c).unwrap());
        }
        self.fb.push('\n');

        &self.fb
    }

    fn xy_to(&self, n: usize) -> (usize, usize) {
        (n % self.w, n / self.w)
    }

    fn xy_from(&self, x: usize, y: usize) -> usize {
        y * self.w + x
    }

    fn get_hex_value(x: usize, y: usize) -> u32 {
        match (x % 2, y % 4) {
            (0, 0) => 0x1,
            (1, 0) => 0x8,
            (0, 1) => 0x2,
            (1, 1) => 0x10,
            (0, 2) => 0x4,
            (1, 2) => 0x20,
            (0, 3) => 0x40,
            (1, 3) => 0x80,
            _ => unreachable!(),
        }
    }
}

/// Draw the current generation of a [`Field`], one dot per live cell.
pub fn draw_field(cam: &mut Camera, field: &Field) {
    assert!(field.width() <= cam.width(), "field is wider than the camera");
    assert!(
        field.height() <= cam.height(),
        "field is taller than the camera"
    );

    for (x, y, alive) in field.cells() {
        if alive {
            cam.draw_pixel(x, y);
        }
    }
}
