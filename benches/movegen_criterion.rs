use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use hollow_chess::game_state::game_state::GameState;
use hollow_chess::game_state::variant::{Variant, VariantConfig};
use hollow_chess::move_generation::legal_move_generator::LegalMoveGenerator;
use hollow_chess::move_generation::move_generator::MoveGenerator;
use hollow_chess::move_generation::perft::perft;

#[derive(Clone, Copy)]
struct BenchCase {
    variant: Variant,
    expected_nodes: &'static [u64],
}

const CASES: &[BenchCase] = &[
    BenchCase {
        variant: Variant::Chess,
        expected_nodes: &[20, 400, 8902],
    },
    BenchCase {
        variant: Variant::Leviathan,
        expected_nodes: &[8, 64],
    },
    BenchCase {
        variant: Variant::Lambda,
        expected_nodes: &[52],
    },
    BenchCase {
        variant: Variant::Helmbreaker,
        expected_nodes: &[16],
    },
    BenchCase {
        variant: Variant::Rite,
        expected_nodes: &[20, 400],
    },
];

fn bench_perft(c: &mut Criterion) {
    let mut group = c.benchmark_group("perft_start");
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(4));
    group.sample_size(20);

    for case in CASES {
        let game = GameState::new_game(VariantConfig::new(case.variant));

        for (depth_idx, expected_nodes) in case.expected_nodes.iter().enumerate() {
            let depth = (depth_idx + 1) as u8;

            // Correctness guard before benchmarking.
            let warmup = perft(&LegalMoveGenerator, &game, depth).expect("perft should run");
            assert_eq!(
                warmup.nodes as u64, *expected_nodes,
                "node mismatch in warmup for {} depth {}",
                case.variant, depth
            );

            group.throughput(Throughput::Elements(*expected_nodes));
            let bench_name = format!("{}_d{}", case.variant, depth);
            let bench_game = game.clone();

            group.bench_with_input(
                BenchmarkId::from_parameter(bench_name),
                expected_nodes,
                |b, expected| {
                    b.iter(|| {
                        let count = perft(&LegalMoveGenerator, black_box(&bench_game), black_box(depth))
                            .expect("perft benchmark run should succeed");
                        assert_eq!(count.nodes as u64, *expected);
                        black_box(count.nodes)
                    });
                },
            );
        }
    }

    group.finish();
}

fn bench_legal_moves(c: &mut Criterion) {
    let mut group = c.benchmark_group("legal_moves_start");
    group.sample_size(50);

    for variant in Variant::ALL {
        let game = GameState::new_game(VariantConfig::new(variant));
        group.bench_function(variant.name(), |b| {
            b.iter(|| {
                let moves = LegalMoveGenerator
                    .generate_legal_moves(black_box(&game))
                    .expect("legal move generation should succeed");
                black_box(moves.len())
            });
        });
    }

    group.finish();
}

criterion_group!(movegen_benches, bench_perft, bench_legal_moves);
criterion_main!(movegen_benches);
