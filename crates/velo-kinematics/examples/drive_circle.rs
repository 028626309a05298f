use velo_kinematics::*;

fn main() {
    let params = BicycleParams::default();
    let model_result = KinematicBicycle::new(params);

    let steering_angle = (2.0_f64 / 10.0).atan(); // δ = atan(L/r) for a 10 m radius
    let speed = core::f64::consts::PI; // one lap of the 10 m circle in 20 s
    let num_steps = 2000;

    match model_result {
        Ok(mut model) => {
            println!("Initializing simulation...");
            println!("  Bicycle Parameters:");
            println!("    Wheelbase:      {} m", model.params().wheelbase);
            println!("    Rear to CG:     {} m", model.params().rear_to_cg);
            println!("    Max Steer Rate: {} rad/s", model.params().max_steer_rate);
            println!("    Sample Time:    {} s", model.params().sample_time);
            println!("  Inputs:");
            println!("    Steering Angle: {:.4} rad (preset)", steering_angle);
            println!("    Speed:          {:.4} m/s", speed);
            println!("    Num Steps:      {}", num_steps);
            println!("\nSimulating...");

            model.set_steering_angle(steering_angle);
            for i in 0..num_steps {
                model.step(speed, 0.0);
                if (i + 1) % 250 == 0 {
                    println!("Step {:>4}: State: {}", i + 1, model.state());
                }
            }

            println!("\nSimulation complete.");
            println!("Final State: {:?}", model.state());
        }
        Err(e) => {
            eprintln!("Failed to initialize bicycle model: {:?}", e);
            eprintln!(
                "Please ensure wheelbase ({}) and sample_time ({}) are positive.",
                params.wheelbase, params.sample_time
            );
        }
    }
}
