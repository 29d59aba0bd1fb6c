use mtq_pwm::*;

fn main() {
    let bits = 10;
    let resolution_result = Resolution::from_bits(bits);

    match resolution_result {
        Ok(resolution) => {
            let mut controller = DutyCycleController::new(resolution);
            let mut sink = RecordingSink::new();

            println!("Initializing sweep...");
            println!("  Resolution: {} ({} bit)", resolution, bits);
            println!("  Initial State: {}", controller.state());
            println!("\nSweeping...");

            for percent in (-20..=120).step_by(20) {
                controller.set_percent(percent);
                sink.apply(controller.scaled_value());
                println!(
                    "Request {:>4}% -> {:>4} ({:>3}%)",
                    percent,
                    controller.scaled_value(),
                    scaled_to_percent(controller.scaled_value(), resolution)
                );
            }

            controller.stop();
            sink.apply(controller.scaled_value());

            println!("\nSweep complete.");
            println!("Final State: {}", controller.state());
            println!("Sink received {} values, last {:?}", sink.applied(), sink.last());
        }
        Err(e) => {
            eprintln!("Failed to build resolution: {}", e);
        }
    }
}
