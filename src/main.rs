#![no_std]
#![no_main]

use defmt_rtt as _;
use max7219::MAX7219;
use panic_probe as _;
use rtic::app;

use wokwi_stopwatch::config::{
    DISPLAY_DEVICES, DISPLAY_INTENSITY, DISPLAY_ROWS, DISPLAY_SPI_HZ, TICK_PERIOD_US,
    XTAL_FREQ_HZ,
};
use wokwi_stopwatch::{digits, display, Command, Snapshot, StopwatchClock, TickGrid};

#[app(device = rp_pico::hal::pac, peripherals = true)]
mod app {
    use super::*;
    use embedded_hal::digital::v2::OutputPin;
    use rp_pico::hal::{
        clocks::{init_clocks_and_plls, Clock},
        fugit::{ExtU32, RateExtU32},
        gpio::{
            bank0::{Gpio13, Gpio14, Gpio15, Gpio25},
            FunctionSio, Interrupt, Pin, PinId, PullDown, PullUp, SioInput, SioOutput,
        },
        sio::Sio,
        spi::Spi,
        timer::{Alarm, Alarm0, Instant, Timer},
        watchdog::Watchdog,
    };

    // Type definition for the MAX7219 display
    type Spi0 = Spi<rp_pico::hal::spi::Enabled, rp_pico::hal::pac::SPI0, (
        Pin<rp_pico::hal::gpio::bank0::Gpio19, rp_pico::hal::gpio::FunctionSpi, rp_pico::hal::gpio::PullDown>,
        Pin<rp_pico::hal::gpio::bank0::Gpio16, rp_pico::hal::gpio::FunctionSpi, rp_pico::hal::gpio::PullDown>,
        Pin<rp_pico::hal::gpio::bank0::Gpio18, rp_pico::hal::gpio::FunctionSpi, rp_pico::hal::gpio::PullDown>
    )>;
    type CsPin = Pin<rp_pico::hal::gpio::bank0::Gpio17, FunctionSio<SioOutput>, PullDown>;
    type DisplayType = MAX7219<max7219::connectors::SpiConnectorSW<Spi0, CsPin>>;

    type Button<I> = Pin<I, FunctionSio<SioInput>, PullUp>;
    type StatusLed = Pin<Gpio25, FunctionSio<SioOutput>, PullDown>;

    /// Start, stop and reset buttons, active low.
    pub struct Buttons {
        start: Button<Gpio13>,
        stop: Button<Gpio14>,
        reset: Button<Gpio15>,
    }

    impl Buttons {
        /// Commands whose button fired since the last call, in start/stop/reset order.
        fn take_commands(&mut self) -> [Option<Command>; 3] {
            [
                take_edge(&mut self.start).then_some(Command::Start),
                take_edge(&mut self.stop).then_some(Command::Stop),
                take_edge(&mut self.reset).then_some(Command::Reset),
            ]
        }
    }

    fn take_edge<I: PinId>(pin: &mut Button<I>) -> bool {
        let fired = pin.interrupt_status(Interrupt::EdgeLow);
        if fired {
            pin.clear_interrupt(Interrupt::EdgeLow);
        }
        fired
    }

    // Shared resources (accessed by multiple tasks)
    #[shared]
    struct Shared {
        clock: StopwatchClock,
    }

    // Local resources (accessed by single tasks)
    #[local]
    struct Local {
        display: DisplayType,
        buttons: Buttons,
        led: StatusLed,
        alarm: Alarm0,
        grid: TickGrid,
    }

    #[init]
    fn init(ctx: init::Context) -> (Shared, Local, init::Monotonics) {
        let mut pac = ctx.device;
        let mut watchdog = Watchdog::new(pac.WATCHDOG);
        let sio = Sio::new(pac.SIO);

        let clocks = init_clocks_and_plls(
            XTAL_FREQ_HZ,
            pac.XOSC,
            pac.CLOCKS,
            pac.PLL_SYS,
            pac.PLL_USB,
            &mut pac.RESETS,
            &mut watchdog,
        )
        .ok()
        .unwrap();

        let mut timer = Timer::new(pac.TIMER, &mut pac.RESETS, &clocks);
        let mut alarm = timer.alarm_0().unwrap();
        let mut grid = TickGrid::new(timer.get_counter().ticks(), TICK_PERIOD_US);
        alarm.schedule_at(Instant::from_ticks(grid.advance())).unwrap();
        alarm.enable_interrupt();

        let pins = rp_pico::Pins::new(
            pac.IO_BANK0,
            pac.PADS_BANK0,
            sio.gpio_bank0,
            &mut pac.RESETS,
        );

        let mut led = pins.led.into_push_pull_output();
        led.set_low().unwrap();

        let buttons = Buttons {
            start: pins.gpio13.into_pull_up_input(),
            stop: pins.gpio14.into_pull_up_input(),
            reset: pins.gpio15.into_pull_up_input(),
        };
        buttons.start.set_interrupt_enabled(Interrupt::EdgeLow, true);
        buttons.stop.set_interrupt_enabled(Interrupt::EdgeLow, true);
        buttons.reset.set_interrupt_enabled(Interrupt::EdgeLow, true);

        let mosi = pins.gpio19.into_function::<rp_pico::hal::gpio::FunctionSpi>();
        let sck = pins.gpio18.into_function::<rp_pico::hal::gpio::FunctionSpi>();
        let miso = pins.gpio16.into_function::<rp_pico::hal::gpio::FunctionSpi>();
        let cs = pins.gpio17.into_push_pull_output();

        let spi = Spi::<_, _, _, 8>::new(pac.SPI0, (mosi, miso, sck));
        let spi = spi.init(
            &mut pac.RESETS,
            clocks.peripheral_clock.freq(),
            DISPLAY_SPI_HZ.Hz(),
            &embedded_hal::spi::MODE_0,
        );

        let mut display = MAX7219::from_spi_cs(DISPLAY_DEVICES, spi, cs).unwrap();
        display.power_on().unwrap();
        for i in 0..DISPLAY_DEVICES {
            display.set_intensity(i, DISPLAY_INTENSITY).unwrap();
            display.clear_display(i).unwrap();
        }

        defmt::info!("stopwatch ready, tick every {=u32} us", TICK_PERIOD_US);

        (
            Shared {
                clock: StopwatchClock::new(),
            },
            Local {
                display,
                buttons,
                led,
                alarm,
                grid,
            },
            init::Monotonics(),
        )
    }

    // Hardware Task: Timer Interrupt (1 kHz)
    #[task(binds = TIMER_IRQ_0, priority = 1, shared = [clock], local = [alarm, grid])]
    fn timer_tick(mut ctx: timer_tick::Context) {
        let alarm = ctx.local.alarm;
        alarm.clear_interrupt();

        // Re-arm on the fixed grid so handler latency does not push later ticks back.
        let next = Instant::from_ticks(ctx.local.grid.advance());
        if alarm.schedule_at(next).is_err() {
            defmt::warn!("tick deadline {=u64} missed", next.ticks());
            alarm.schedule(TICK_PERIOD_US.micros()).unwrap();
        }

        // The whole carry chain runs under the lock, so idle never sees it half done.
        ctx.shared.clock.lock(|c| c.tick());
    }

    // Hardware Task: GPIO Interrupt (Button Press)
    //
    // Same priority as the tick so the two never preempt each other. Bounces are
    // harmless: every command just overwrites a flag.
    #[task(binds = IO_IRQ_BANK0, priority = 1, shared = [clock], local = [buttons, led])]
    fn button_press(mut ctx: button_press::Context) {
        for command in ctx.local.buttons.take_commands().into_iter().flatten() {
            ctx.shared.clock.lock(|c| c.apply(command));

            let indicator = command.indicator();
            if indicator.is_lit() {
                ctx.local.led.set_high().unwrap();
            } else {
                ctx.local.led.set_low().unwrap();
            }

            defmt::info!("{} -> {}", command, indicator);
        }
    }

    // Display loop: redraws only when the visible time changed.
    #[idle(shared = [clock], local = [display])]
    fn idle(mut ctx: idle::Context) -> ! {
        let mut shown: Option<Snapshot> = None;

        loop {
            let snapshot = ctx.shared.clock.lock(|c| c.snapshot());

            if shown != Some(snapshot) {
                let buffers = display::prepare_buffer(&digits::format(&snapshot));
                if write_frame(ctx.local.display, &buffers) {
                    shown = Some(snapshot);
                }
            }

            cortex_m::asm::wfi();
        }
    }

    /// Writes one frame to the chain. A failed frame is retried on the next pass.
    fn write_frame(
        display: &mut DisplayType,
        buffers: &[[u8; DISPLAY_ROWS]; DISPLAY_DEVICES],
    ) -> bool {
        for (dev_idx, buffer) in buffers.iter().enumerate() {
            if display.write_raw(dev_idx, buffer).is_err() {
                defmt::warn!("display write failed on device {=usize}", dev_idx);
                return false;
            }
        }
        true
    }
}
