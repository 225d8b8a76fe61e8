use std::num::NonZeroUsize;

use log::{info, trace};
use rayon::{ThreadPool, ThreadPoolBuilder};

use crate::core::actions::ports::colour_map::ColourMap;
use crate::core::actions::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::actions::render_frame::errors::RenderPoolError;
use crate::core::actions::render_frame::render_rows::render_rows;
use crate::core::data::frame_size::FrameSize;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;
use crate::core::fractals::mandelbrot::colour_map::GrayscaleColourMap;
use crate::core::util::partition_rows::partition_rows;

pub type MandelbrotRenderPool = RenderPool<MandelbrotAlgorithm, GrayscaleColourMap>;

/// Fixed set of worker threads that renders whole frames.
///
/// The threads live as long as the pool. Each pass splits the frame into one
/// row band per worker, hands every band its own slice of the output, and
/// returns only once all bands are written.
pub struct RenderPool<Alg, CMap> {
    pool: ThreadPool,
    worker_count: NonZeroUsize,
    algorithm: Alg,
    colour_map: CMap,
}

impl<Alg, CMap> RenderPool<Alg, CMap>
where
    Alg: FractalAlgorithm + Sync,
    CMap: ColourMap<Alg::Success> + Sync,
{
    pub fn new(
        worker_count: NonZeroUsize,
        algorithm: Alg,
        colour_map: CMap,
    ) -> Result<Self, RenderPoolError> {
        let pool = ThreadPoolBuilder::new()
            .num_threads(worker_count.get())
            .thread_name(|idx| format!("render-band-{idx}"))
            .build()?;

        info!("render pool started with {} workers", worker_count);

        Ok(Self {
            pool,
            worker_count,
            algorithm,
            colour_map,
        })
    }

    #[must_use]
    pub fn worker_count(&self) -> NonZeroUsize {
        self.worker_count
    }

    #[must_use]
    pub fn render_frame(&self, viewport: &Viewport, size: FrameSize) -> PixelBuffer {
        let mut frame = PixelBuffer::new(size);
        self.render_into(viewport, &mut frame);
        frame
    }

    /// Overwrites every byte of `frame` with the view through `viewport`.
    ///
    /// A panic inside a band is re-raised here once the other bands finish,
    /// so a caller never sees a partially written frame.
    pub fn render_into(&self, viewport: &Viewport, frame: &mut PixelBuffer) {
        let size = frame.size();
        let bands = partition_rows(size.height(), self.worker_count);
        let slices = frame.band_slices_mut(&bands);
        let algorithm = &self.algorithm;
        let colour_map = &self.colour_map;

        self.pool.scope(|scope| {
            for (band, out) in bands.iter().zip(slices) {
                if band.is_empty() {
                    continue;
                }

                scope.spawn(move |_| {
                    trace!("rendering rows {}..{}", band.start, band.end);
                    render_rows(band.rows(), out, size, viewport, algorithm, colour_map);
                });
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::actions::render_frame::render_rows::render_rows_serial;
    use crate::core::data::colour::Colour;
    use crate::core::data::complex::Complex;
    use std::collections::HashSet;
    use std::sync::Mutex;

    fn workers(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).unwrap()
    }

    #[derive(Debug)]
    struct StubSuccessAlgorithm {}

    impl FractalAlgorithm for StubSuccessAlgorithm {
        type Success = u64;

        fn compute(&self, point: Complex) -> u64 {
            ((point.real + 10.0) * 1000.0) as u64 + ((point.imag + 10.0) * 7.0) as u64
        }
    }

    #[derive(Debug)]
    struct StubColourMap {}

    impl ColourMap<u64> for StubColourMap {
        fn map(&self, value: u64) -> Colour {
            Colour {
                r: value as u8,
                g: (value >> 8) as u8,
                b: (value >> 16) as u8,
            }
        }
    }

    #[derive(Debug, Default)]
    struct ThreadRecordingAlgorithm {
        threads: Mutex<HashSet<String>>,
    }

    impl FractalAlgorithm for ThreadRecordingAlgorithm {
        type Success = u64;

        fn compute(&self, _: Complex) -> u64 {
            let name = std::thread::current().name().unwrap_or_default().to_string();
            self.threads.lock().unwrap().insert(name);
            1
        }
    }

    fn stub_pool(n: usize) -> RenderPool<StubSuccessAlgorithm, StubColourMap> {
        RenderPool::new(workers(n), StubSuccessAlgorithm {}, StubColourMap {}).unwrap()
    }

    fn viewport() -> Viewport {
        Viewport::new(-2.0, 2.0, -2.0, 2.0).unwrap()
    }

    #[test]
    fn test_parallel_generates_same_bytes_as_serial() {
        let pool = stub_pool(4);
        let size = FrameSize::new(37, 23).unwrap();

        let parallel = pool.render_frame(&viewport(), size);
        let serial = render_rows_serial(&viewport(), size, &StubSuccessAlgorithm {}, &StubColourMap {});

        assert_eq!(parallel, serial);
    }

    #[test]
    fn test_parallel_with_more_workers_than_rows() {
        let pool = stub_pool(15);
        let size = FrameSize::new(9, 3).unwrap();

        let parallel = pool.render_frame(&viewport(), size);
        let serial = render_rows_serial(&viewport(), size, &StubSuccessAlgorithm {}, &StubColourMap {});

        assert_eq!(parallel, serial);
    }

    #[test]
    fn test_parallel_with_single_worker() {
        let pool = stub_pool(1);
        let size = FrameSize::new(5, 5).unwrap();

        let parallel = pool.render_frame(&viewport(), size);
        let serial = render_rows_serial(&viewport(), size, &StubSuccessAlgorithm {}, &StubColourMap {});

        assert_eq!(parallel, serial);
    }

    #[test]
    fn test_render_into_overwrites_previous_frame() {
        let pool = stub_pool(3);
        let size = FrameSize::new(8, 7).unwrap();
        let mut frame = PixelBuffer::from_data(size, vec![0xEE; size.rgb_len()]).unwrap();

        pool.render_into(&viewport(), &mut frame);

        assert_eq!(frame, pool.render_frame(&viewport(), size));
    }

    #[test]
    fn test_bands_run_on_pool_threads() {
        let pool = RenderPool::new(
            workers(3),
            ThreadRecordingAlgorithm::default(),
            StubColourMap {},
        )
        .unwrap();

        let _ = pool.render_frame(&viewport(), FrameSize::new(4, 30).unwrap());

        let threads = pool.algorithm.threads.lock().unwrap();
        assert!(!threads.is_empty());
        assert!(threads.iter().all(|name| name.starts_with("render-band-")));
    }

    #[test]
    fn test_mandelbrot_default_view_buffer_length() {
        let pool = MandelbrotRenderPool::new(
            workers(15),
            MandelbrotAlgorithm::new(1000).unwrap(),
            GrayscaleColourMap::new(1000).unwrap(),
        )
        .unwrap();
        let size = FrameSize::new(800, 600).unwrap();

        let frame = pool.render_frame(&viewport(), size);

        assert_eq!(frame.buffer_size(), 1_440_000);
        assert_eq!(frame.pixel(0, 0), Some(Colour::BLACK));
        // Pixel (400, 300) samples the origin, which never escapes.
        assert_eq!(frame.pixel(400, 300), Some(Colour::WHITE));
    }

    #[test]
    fn test_worker_count_is_reported() {
        assert_eq!(stub_pool(6).worker_count().get(), 6);
    }
}
