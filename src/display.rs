//! ST7789 panel, standing upright: 170×320 over SPI with DMA.
//!
//! The game draws on a 240×320 canvas; wrap the panel in
//! [`FitWidth`](crate::FitWidth) with [`PANEL_SIZE`] to get there.

use embedded_graphics::prelude::Size;
use embedded_hal_bus::spi::ExclusiveDevice;
use esp_hal::{
    Async,
    dma::{
        DmaRxBuf,
        DmaTxBuf,
    },
    dma_buffers,
    gpio::{
        Level,
        Output,
        OutputConfig,
    },
    spi::master::Spi,
    time::Rate,
};

use crate::DisplayResources;

type SpiInterface<'a> = mipidsi::interface::SpiInterface<
    'a,
    ExclusiveDevice<esp_hal::spi::master::SpiDmaBus<'a, Async>, Output<'a>, esp_hal::delay::Delay>,
    Output<'a>,
>;

/// The badge's ST7789 display in portrait orientation.
pub type Display<'a> = mipidsi::Display<SpiInterface<'a>, mipidsi::models::ST7789, Output<'a>>;

/// Visible area of the panel in portrait orientation.
pub const PANEL_SIZE: Size = Size::new(170, 320);

/// Column offset of the 170 visible columns inside the controller's 240.
const PANEL_OFFSET_X: u16 = 35;

impl<'a> From<DisplayResources<'a>> for Display<'a> {
    fn from(res: DisplayResources<'a>) -> Self {
        let (rx_buffer, rx_descriptors, tx_buffer, tx_descriptors) = dma_buffers!(32000);
        let dma_rx_buf = DmaRxBuf::new(rx_descriptors, rx_buffer).unwrap();
        let dma_tx_buf = DmaTxBuf::new(tx_descriptors, tx_buffer).unwrap();

        let mut delay = esp_hal::delay::Delay::new();

        // The pin keeps its level after the driver is dropped.
        let _backlight = Output::new(res.backlight, Level::High, OutputConfig::default());

        let dc = Output::new(res.dc, Level::Low, OutputConfig::default());
        let mut rst = Output::new(res.rst, Level::Low, OutputConfig::default());
        rst.set_high();

        let spi = Spi::new(
            res.spi,
            esp_hal::spi::master::Config::default().with_frequency(Rate::from_mhz(80)),
        )
        .unwrap()
        .with_sck(res.sck)
        .with_mosi(res.mosi)
        .with_miso(res.miso)
        .with_dma(res.dma)
        .with_buffers(dma_rx_buf, dma_tx_buf)
        .into_async();

        let cs = Output::new(res.cs, Level::High, OutputConfig::default());
        let spi_device = ExclusiveDevice::new(spi, cs, delay).unwrap();

        // Rectangle fills stream through this; it only needs to hold a burst.
        let buffer = crate::mk_static!([u8; 4096], [0_u8; 4096]);
        let di = mipidsi::interface::SpiInterface::new(spi_device, dc, buffer);

        mipidsi::Builder::new(mipidsi::models::ST7789, di)
            .reset_pin(rst)
            .display_size(PANEL_SIZE.width as u16, PANEL_SIZE.height as u16)
            .invert_colors(mipidsi::options::ColorInversion::Inverted)
            .orientation(mipidsi::options::Orientation::new())
            .display_offset(PANEL_OFFSET_X, 0)
            .init(&mut delay)
            .unwrap()
    }
}
