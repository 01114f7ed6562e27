// ============================================================================
// IMAGE - Cálculo de resize y pipeline load -> check -> resize -> encode
// ============================================================================
// El pipeline es genérico sobre `ImageCodec` para poder cambiar el canvas
// del navegador por un fake en los tests.
// ============================================================================

use crate::error::FileError;
use crate::utils::encoding::blob_size;
use crate::utils::validate::not_empty_string;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Dimensions {
    pub height: f64,
    pub width: f64,
}

impl Dimensions {
    pub fn new(height: f64, width: f64) -> Self {
        Self { height, width }
    }
}

/// Reduce `height`/`width` para que entren en `max_height`/`max_width`
/// manteniendo la proporción. Si ya entran vuelven sin cambios.
/// Devuelve `None` con valores no finitos o negativos.
pub fn calc_image_resize_dimensions(
    height: f64,
    width: f64,
    max_height: f64,
    max_width: f64,
) -> Option<Dimensions> {
    let values = [height, width, max_height, max_width];
    if values.iter().any(|v| !v.is_finite() || *v < 0.0) {
        return None;
    }

    if height <= max_height && width <= max_width {
        return Some(Dimensions::new(height, width));
    }

    // solo manda el lado que se pasa de su máximo; si se pasan los dos, ambos
    // son > 0 y max_height / height <= max_width / width se compara multiplicando
    let height_binds = if height <= max_height {
        false
    } else if width <= max_width {
        true
    } else {
        max_height * width <= max_width * height
    };

    if height_binds {
        Some(Dimensions::new(max_height, width * max_height / height))
    } else {
        Some(Dimensions::new(height * max_width / width, max_width))
    }
}

/// Límites que aplica `load_and_resize`
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResizeLimits {
    pub min_height: f64,
    pub max_height: f64,
    pub min_width: f64,
    pub max_width: f64,
    /// Tamaño máximo de la data URL re-codificada
    pub max_bytes: usize,
}

/// Decodifica y re-codifica imágenes
#[allow(async_fn_in_trait)]
pub trait ImageCodec {
    type Image;

    /// Convierte una data URL en una imagen decodificada
    async fn decode(&self, data_url: &str) -> Result<Self::Image, FileError>;

    fn natural_size(&self, image: &Self::Image) -> Dimensions;

    /// Dibuja `image` en `size` y devuelve el resultado como data URL
    fn encode_resized(&self, image: &Self::Image, size: Dimensions) -> Result<String, FileError>;
}

/// Resultado de un `load_and_resize` exitoso
#[derive(Clone, Debug, PartialEq)]
pub struct ResizedImage<I> {
    pub image: I,
    pub data_url: String,
    pub size: Dimensions,
}

/// decode -> mínimos -> resize -> encode -> tope de bytes ->
/// decode de la data URL redimensionada
pub async fn load_and_resize<C: ImageCodec>(
    codec: &C,
    data_url: &str,
    limits: &ResizeLimits,
) -> Result<ResizedImage<C::Image>, FileError> {
    if !not_empty_string(data_url) {
        return Err(FileError::Empty);
    }

    let image = codec.decode(data_url).await?;
    let natural = codec.natural_size(&image);

    if natural.height.is_nan()
        || natural.width.is_nan()
        || natural.height < limits.min_height
        || natural.width < limits.min_width
    {
        log::warn!(
            "⚠️ [IMAGE] {}x{} está por debajo del mínimo {}x{}",
            natural.width,
            natural.height,
            limits.min_width,
            limits.min_height
        );
        return Err(FileError::TooSmall {
            min_height: limits.min_height,
            min_width: limits.min_width,
        });
    }

    let size = calc_image_resize_dimensions(
        natural.height,
        natural.width,
        limits.max_height,
        limits.max_width,
    )
    .ok_or(FileError::Processing)?;

    let resized = codec.encode_resized(&image, size)?;
    let byte_size = blob_size(&resized);
    if byte_size > limits.max_bytes {
        log::warn!(
            "⚠️ [IMAGE] La imagen redimensionada pesa {} bytes, el máximo es {}",
            byte_size,
            limits.max_bytes
        );
        return Err(FileError::TooLarge {
            max_bytes: limits.max_bytes,
        });
    }

    let image = codec.decode(&resized).await?;
    log::debug!("🖼️ [IMAGE] Redimensionada a {}x{}", size.width, size.height);
    Ok(ResizedImage {
        image,
        data_url: resized,
        size,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use std::cell::RefCell;

    #[test]
    fn height_bound_image_keeps_width_proportional() {
        assert_eq!(
            calc_image_resize_dimensions(2000.0, 1000.0, 1000.0, 1000.0),
            Some(Dimensions::new(1000.0, 500.0))
        );
    }

    #[test]
    fn width_bound_image_keeps_height_proportional() {
        assert_eq!(
            calc_image_resize_dimensions(600.0, 1200.0, 1000.0, 800.0),
            Some(Dimensions::new(400.0, 800.0))
        );
    }

    #[test]
    fn binding_dimension_wins_when_both_exceed() {
        // ratio de alto 1000/1200, de ancho 500/1000: manda el ancho
        let size = calc_image_resize_dimensions(1200.0, 1000.0, 1000.0, 500.0).unwrap();
        assert_eq!(size, Dimensions::new(600.0, 500.0));
        assert!(size.height <= 1000.0 && size.width <= 500.0);
    }

    #[test]
    fn small_images_pass_through() {
        assert_eq!(
            calc_image_resize_dimensions(300.0, 400.0, 1000.0, 1000.0),
            Some(Dimensions::new(300.0, 400.0))
        );
        assert_eq!(
            calc_image_resize_dimensions(1000.0, 1000.0, 1000.0, 1000.0),
            Some(Dimensions::new(1000.0, 1000.0))
        );
    }

    #[test]
    fn zero_sides_never_divide() {
        assert_eq!(
            calc_image_resize_dimensions(0.0, 2000.0, 0.0, 1000.0),
            Some(Dimensions::new(0.0, 1000.0))
        );
        assert_eq!(
            calc_image_resize_dimensions(2000.0, 0.0, 1000.0, 0.0),
            Some(Dimensions::new(1000.0, 0.0))
        );
        assert_eq!(
            calc_image_resize_dimensions(500.0, 400.0, 0.0, 0.0),
            Some(Dimensions::new(0.0, 0.0))
        );
        assert_eq!(
            calc_image_resize_dimensions(0.0, 0.0, 0.0, 0.0),
            Some(Dimensions::new(0.0, 0.0))
        );
    }

    #[test]
    fn non_numeric_input_yields_none() {
        assert_eq!(calc_image_resize_dimensions(f64::NAN, 1.0, 1.0, 1.0), None);
        assert_eq!(calc_image_resize_dimensions(1.0, 1.0, f64::INFINITY, 1.0), None);
        assert_eq!(calc_image_resize_dimensions(1.0, -1.0, 1.0, 1.0), None);
    }

    /// Las imágenes son tamaños; las "data URLs" son `img:<h>x<w>`
    /// rellenadas hasta un largo elegido.
    struct FakeCodec {
        encoded_len: usize,
        fail_decode: bool,
        encoded: RefCell<Vec<Dimensions>>,
    }

    impl FakeCodec {
        fn new(encoded_len: usize) -> Self {
            Self {
                encoded_len,
                fail_decode: false,
                encoded: RefCell::new(Vec::new()),
            }
        }
    }

    impl ImageCodec for FakeCodec {
        type Image = Dimensions;

        async fn decode(&self, data_url: &str) -> Result<Dimensions, FileError> {
            if self.fail_decode {
                return Err(FileError::Decode);
            }
            let spec = data_url
                .trim_start_matches("img:")
                .trim_end_matches('.');
            let (h, w) = spec.split_once('x').ok_or(FileError::Decode)?;
            Ok(Dimensions::new(
                h.parse().map_err(|_| FileError::Decode)?,
                w.parse().map_err(|_| FileError::Decode)?,
            ))
        }

        fn natural_size(&self, image: &Dimensions) -> Dimensions {
            *image
        }

        fn encode_resized(&self, _image: &Dimensions, size: Dimensions) -> Result<String, FileError> {
            self.encoded.borrow_mut().push(size);
            let mut url = format!("img:{}x{}", size.height, size.width);
            while url.len() < self.encoded_len {
                url.push('.');
            }
            Ok(url)
        }
    }

    fn limits(max_bytes: usize) -> ResizeLimits {
        ResizeLimits {
            min_height: 100.0,
            max_height: 1000.0,
            min_width: 100.0,
            max_width: 1000.0,
            max_bytes,
        }
    }

    #[test]
    fn resizes_and_returns_decoded_result() {
        let codec = FakeCodec::new(64);
        let resized = block_on(load_and_resize(&codec, "img:2000x1000", &limits(64))).unwrap();

        assert_eq!(resized.size, Dimensions::new(1000.0, 500.0));
        assert_eq!(resized.image, Dimensions::new(1000.0, 500.0));
        assert_eq!(resized.data_url.len(), 64);
        assert_eq!(*codec.encoded.borrow(), vec![Dimensions::new(1000.0, 500.0)]);
    }

    #[test]
    fn rejects_empty_input() {
        let codec = FakeCodec::new(0);
        let err = block_on(load_and_resize(&codec, "", &limits(64))).unwrap_err();
        assert_eq!(err, FileError::Empty);
    }

    #[test]
    fn rejects_undersized_images() {
        let codec = FakeCodec::new(0);
        let err = block_on(load_and_resize(&codec, "img:99x500", &limits(64))).unwrap_err();
        assert_eq!(
            err,
            FileError::TooSmall {
                min_height: 100.0,
                min_width: 100.0
            }
        );
        assert!(codec.encoded.borrow().is_empty());
    }

    #[test]
    fn rejects_results_over_byte_budget() {
        let codec = FakeCodec::new(65);
        let err = block_on(load_and_resize(&codec, "img:500x500", &limits(64))).unwrap_err();
        assert_eq!(err, FileError::TooLarge { max_bytes: 64 });
    }

    #[test]
    fn decode_failure_is_reported() {
        let mut codec = FakeCodec::new(0);
        codec.fail_decode = true;
        let err = block_on(load_and_resize(&codec, "img:500x500", &limits(64))).unwrap_err();
        assert_eq!(err, FileError::Decode);
        assert_eq!(err.to_string(), "Error loading file. Please try again.");
    }
}
