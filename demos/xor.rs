use nn_primer::{ClassifierSpec, Sgd, train_network};
use rand::{rngs::StdRng, SeedableRng};

fn main() -> nn_primer::Result<()> {
    let mut rng = StdRng::seed_from_u64(42);
    let spec = ClassifierSpec { drop_p: 0.0, ..ClassifierSpec::new(2, 2, vec![8, 8]) };
    let mut network = spec.build(&mut rng)?;

    let inputs = vec![
        vec![1.0, 0.0],
        vec![1.0, 1.0],
        vec![0.0, 1.0],
        vec![0.0, 0.0],
    ];
    // One-hot: [xor = 0, xor = 1]
    let expected_outputs = vec![
        vec![0.0, 1.0],
        vec![1.0, 0.0],
        vec![0.0, 1.0],
        vec![1.0, 0.0],
    ];

    let optimizer = Sgd::new(0.1);
    let epochs = 2000;

    for epoch in 0..epochs {
        let loss = train_network(&mut network, &inputs, &expected_outputs, &optimizer, &mut rng);
        if epoch % 200 == 0 {
            println!("Epoch {epoch}: loss = {loss:.6}");
        }
    }

    for input in &inputs {
        let probs: Vec<f64> = network.forward(input.clone()).iter().map(|lp| lp.exp()).collect();
        println!("Input: {:?} -> P(xor = 1) = {:.4}", input, probs[1]);
    }
    Ok(())
}
