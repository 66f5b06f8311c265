use handmap::cards::Alphabet;
use handmap::plotting::PlotOptions;
use handmap::plotting::flip;
use handmap::plotting::plot;
use handmap::simulation::Simulator;
use handmap::tally::Tally;
use handmap::*;

#[test]
fn simulate_tally_plot() {
    let mut simulator = Simulator::new(SEED, SUITS, RANKS, 2).unwrap();
    let rounds = simulator.run(500, false).unwrap();
    let tally = Tally::from_rounds(&Alphabet::default(), &rounds);
    let dealt = tally.deals().iter().flatten().sum::<u64>();
    assert_eq!(dealt, 1000);
    let wins = tally.wins();
    assert!(wins.iter().flatten().all(|p| (0. ..=1.).contains(p)));
    let labels = tally.labels();
    let options = PlotOptions {
        title: Some("Heads-up win rate".into()),
        rows: labels.clone(),
        cols: labels,
        output: None,
    };
    let figure = plot(&wins, &options).unwrap();
    assert!(figure.svg.contains("<svg"));
    assert!(figure.svg.contains("AKs"));
    assert!(figure.svg.contains("Heads-up win rate"));
}

#[test]
fn every_hand_wins_ties_or_loses() {
    let rounds = Simulator::new(11, SUITS, RANKS, 6)
        .unwrap()
        .run(300, false)
        .unwrap();
    let tally = Tally::from_rounds(&Alphabet::default(), &rounds);
    for (wins, (ties, deals)) in tally
        .wins()
        .iter()
        .flatten()
        .zip(tally.ties().iter().flatten().zip(tally.deals().iter().flatten()))
    {
        assert!(wins + ties <= 1. + 1e-12);
        if *deals == 0 {
            assert_eq!(wins + ties, 0.);
        }
    }
}

#[test]
fn reproducible_for_seed() {
    let a = Simulator::new(0, "shdc", "23456789TJQKA", 2).unwrap().run(50, false).unwrap();
    let b = Simulator::new(0, "shdc", "23456789TJQKA", 2).unwrap().run(50, false).unwrap();
    assert_eq!(a, b);
    assert_eq!(a[0].board(), b[0].board());
}

#[test]
fn table_size_boundary() {
    for players in 1..=23 {
        assert!(Simulator::new(SEED, SUITS, RANKS, players).unwrap().step(false).is_ok());
    }
    for players in 24..=30 {
        assert!(matches!(
            Simulator::new(SEED, SUITS, RANKS, players).unwrap().step(false),
            Err(Error::InsufficientCards { .. })
        ));
    }
}

#[test]
fn flipped_weakest_first_data_plots_like_strongest_first() {
    let strongest = vec![vec![0.5, 0.3], vec![0.1, 0.9]];
    let weakest = flip(&strongest);
    assert_eq!(weakest, vec![vec![0.9, 0.1], vec![0.3, 0.5]]);
    let labels = vec!["A".to_string(), "K".to_string()];
    let options = PlotOptions {
        title: None,
        rows: labels.clone(),
        cols: labels,
        output: None,
    };
    let a = plot(&strongest, &options).unwrap();
    let b = plot(&flip(&weakest), &options).unwrap();
    assert_eq!(a.svg, b.svg);
}

#[test]
fn plot_rejects_mismatched_shapes() {
    let labels = vec!["A".to_string(), "K".to_string()];
    let options = PlotOptions {
        title: None,
        rows: labels.clone(),
        cols: labels,
        output: None,
    };
    assert!(matches!(
        plot(&[vec![0.5, 0.3]], &options),
        Err(Error::ShapeMismatch { .. })
    ));
    assert!(matches!(
        plot(&[vec![0.5, 0.3, 0.2], vec![0.1, 0.9, 0.4]], &options),
        Err(Error::ShapeMismatch { .. })
    ));
}
