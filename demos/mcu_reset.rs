// SPDX-FileCopyrightText: The mcuio authors
// SPDX-License-Identifier: MPL-2.0

use std::io::{stdin, stdout, Write as _};

use mcuio::{
    devices::mackie_control::{
        self, set_lcd, set_lcd_c4, set_lcd_xt, set_time_display, SurfaceVariant, ThreadSleeper,
    },
    MidiDeviceDescriptor, MidiOutputConnection as _, MidirDeviceManager,
};

fn main() {
    pretty_env_logger::init();
    match run() {
        Ok(()) => (),
        Err(err) => println!("Error: {err}"),
    }
}

fn surface_variant(descriptor: &MidiDeviceDescriptor) -> SurfaceVariant {
    if descriptor == mackie_control::MIDI_DEVICE_DESCRIPTOR_XT {
        SurfaceVariant::MackieControlXt
    } else if descriptor == mackie_control::MIDI_DEVICE_DESCRIPTOR_C4 {
        SurfaceVariant::MackieC4
    } else {
        SurfaceVariant::MackieControl
    }
}

fn run() -> anyhow::Result<()> {
    let device_manager = MidirDeviceManager::new().map_err(|err| anyhow::anyhow!("{err}"))?;
    let mut surfaces = device_manager.detect_output_ports(mackie_control::MIDI_DEVICE_DESCRIPTORS);
    let (descriptor, port) = match surfaces.len() {
        0 => anyhow::bail!("no port found"),
        1 => surfaces.remove(0),
        _ => {
            println!("\nAvailable surfaces:");
            for (i, (_, port)) in surfaces.iter().enumerate() {
                println!("{i}: {port_name}", port_name = port.name);
            }
            print!("Please select a surface: ");
            stdout().flush()?;
            let mut input = String::new();
            stdin().read_line(&mut input)?;
            surfaces.remove(input.trim().parse::<usize>()?)
        }
    };
    let variant = surface_variant(descriptor);
    println!("{port_name}: resetting {variant}", port_name = port.name);

    let port_name = port.name.clone();
    let mut connection = device_manager
        .connect_output_port(port)
        .map_err(|err| anyhow::anyhow!("{err}"))?;
    mackie_control::reset_variant(&mut connection, variant, &mut ThreadSleeper)?;

    for message in set_time_display("mcuio")? {
        connection.send_midi_message(&message)?;
    }
    let greeting = match variant {
        SurfaceVariant::MackieControl => set_lcd(0, "Hello")?,
        SurfaceVariant::MackieControlXt => set_lcd_xt(0, "Hello")?,
        SurfaceVariant::MackieC4 => set_lcd_c4(0, 0, "Hello")?,
    };
    connection.send_midi_message(&greeting)?;
    println!("{port_name}: done");
    Ok(())
}
