use edge_detector::detect_edges_timed;
use edge_detector::image::ImageU8;

fn main() {
    // Demo stub: runs the detector over a synthetic softened step edge
    let w = 640usize;
    let h = 480usize;
    let stride = w; // tightly packed
    let mut gray = vec![0u8; w * h];
    for y in 0..h {
        for x in 0..w {
            gray[y * w + x] = match x.cmp(&(w / 2)) {
                std::cmp::Ordering::Less => 0,
                std::cmp::Ordering::Equal => 128,
                std::cmp::Ordering::Greater => 255,
            };
        }
    }
    let img = ImageU8 {
        w,
        h,
        stride,
        data: &gray,
    };

    let result = detect_edges_timed(&img, 15.0);
    let summary = result.summary();
    println!(
        "edges={} seeds={} gradient_ms={:.3} nms_ms={:.3} hysteresis_ms={:.3}",
        summary.edge_count,
        summary.seed_count,
        summary.gradient_ms,
        summary.nms_ms,
        summary.hysteresis_ms
    );
}
