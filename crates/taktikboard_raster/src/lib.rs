//! `taktikboard_raster` — Software-Rasterizer für Taktikboard-Szenen.
//!
//! Zeichnet eine backend-neutrale Display-List (`DrawOp`) in ein
//! RGBA-Bild und kodiert es als PNG:
//! - Gefüllte und umrandete Grundformen (Rechteck, Kreis, Ellipse, Polygon)
//! - Dicke Linienzüge mit runden Kappen, gestrichelte Linien
//! - Zentrierter, rotierbarer Text über einen eingebetteten 5×7-Bitmap-Font
//!
//! Dieselbe Display-List treibt im Editor das interaktive Backend.
//! Export und Vorschaubilder sehen daher aus wie der Bildschirminhalt.
//!
//! # Beispiel
//! ```
//! use glam::Vec2;
//! use taktikboard_raster::{DrawOp, encode_png, render_ops, rgb};
//!
//! let ops = vec![DrawOp::FillCircle {
//!     center: Vec2::new(40.0, 40.0),
//!     radius: 20.0,
//!     color: rgb(46, 139, 87),
//! }];
//! let image = render_ops(80, 80, &ops);
//! let png = encode_png(&image)?;
//! assert!(!png.is_empty());
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod draw;
pub mod font;
pub mod raster;

pub use draw::{Color, DrawOp, rgb, rgba};
pub use raster::{encode_png, render_ops};
