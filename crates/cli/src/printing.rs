use aestivo_analysis::GenerationSummary;
use aestivo_sim::simulation::Configuration;

pub fn print_parameters(config: &Configuration) {
    let exec = &config.execution;
    let pop = &config.population;
    let schedule = &config.schedule;

    println!("\n📋 Simulation Configuration");
    println!("  • Total Size: {} [-n, --total-size]", pop.total_size);
    println!("  • Generations: {} [-g, --generations]", exec.total_generations);
    println!("  • Workers: {} [-w, --workers]", exec.workers);
    println!("  • Record Every: {} [--record-every]", exec.record_every);
    if let Some(seed) = exec.seed {
        println!("  • Random Seed: {seed} [--seed]");
    } else {
        println!("  • Random Seed: Random [--seed]");
    }

    println!("\n🧬 Locus Pairs");
    println!("  • Pairs: {} [-p, --pairs]", pop.n_pairs());
    for (i, rate) in pop.recombination_rates.iter().enumerate() {
        println!(
            "    - pair {i}: p_A = {:.3}, p_B = {:.3}, c = {rate:.2e}",
            pop.initial_frequencies[2 * i],
            pop.initial_frequencies[2 * i + 1],
        );
    }

    println!("\n🌦  Seasonal Schedule");
    println!(
        "  • Half Period: {} generations [--half-period]",
        schedule.half_period
    );
    println!(
        "  • Aestivating: {} wet [--wet-aestivating], {} dry [--dry-aestivating]",
        schedule.wet_aestivating, schedule.dry_aestivating
    );
    println!("  • Starts In: {} [--start-in]", schedule.start_in);
}

pub fn print_summary(summary: &GenerationSummary) {
    println!(
        "\n📊 Generation {} ({} season)",
        summary.generation, summary.season
    );
    for (name, buffer) in summary.compartments() {
        println!("  • {name}: {} individuals", buffer.individuals);
        println!("    - mean allele frequency: {:.4}", buffer.mean_frequency);
        println!(
            "    - mean r²: {:.4} ({} undefined pairs)",
            buffer.mean_r_squared, buffer.undefined_pairs
        );
    }
}
