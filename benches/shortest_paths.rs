use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use graphx::{Bfs, Dijkstra, Graph, ShortestPaths};

fn make_line_graph(size: i64) -> Graph {
    let mut graph = Graph::with_capacity(size as usize, false);

    for i in 1..size {
        graph.add_edge(i - 1, i, i % 7).unwrap();
    }

    graph
}

fn make_grid_graph(side: i64) -> Graph {
    let mut graph = Graph::with_capacity((side * side) as usize, false);

    for x in 0..side {
        for y in 0..side {
            if x + 1 < side {
                graph.add_edge((x, y), (x + 1, y), (x * y) % 5 + 1).unwrap();
            }
            if y + 1 < side {
                graph.add_edge((x, y), (x, y + 1), (x + y) % 3 + 1).unwrap();
            }
        }
    }

    graph
}

fn bench_make_graph(c: &mut Criterion) {
    let mut g = c.benchmark_group("graph creation");

    for size in [100, 10_000, 1_000_000] {
        g.bench_with_input(
            BenchmarkId::new("make_line_graph", size),
            &size,
            |b, size| b.iter(|| black_box(make_line_graph(*size))),
        );
    }
}

fn bench_bfs(c: &mut Criterion) {
    let mut g = c.benchmark_group("bfs");

    for side in [10, 100, 300] {
        g.bench_with_input(BenchmarkId::new("grid", side), &side, |b, side| {
            let graph = make_grid_graph(*side);
            let mut bfs = Bfs::new(&graph);
            b.iter(|| {
                bfs.run((0, 0));
                black_box(bfs.min_dist((*side - 1, *side - 1)))
            })
        });
    }
}

fn bench_dijkstra(c: &mut Criterion) {
    let mut g = c.benchmark_group("dijkstra");

    for side in [10, 100, 300] {
        g.bench_with_input(BenchmarkId::new("grid", side), &side, |b, side| {
            let graph = make_grid_graph(*side);
            let mut dijkstra = Dijkstra::new(&graph);
            b.iter(|| {
                dijkstra.run((0, 0));
                black_box(dijkstra.min_dist((*side - 1, *side - 1)))
            })
        });
    }

    for size in [100, 10_000] {
        g.bench_with_input(BenchmarkId::new("line", size), &size, |b, size| {
            let graph = make_line_graph(*size);
            let mut dijkstra = Dijkstra::new(&graph);
            b.iter(|| {
                dijkstra.run(0);
                black_box(dijkstra.min_dist(*size - 1))
            })
        });
    }
}

criterion_group!(benches, bench_make_graph, bench_bfs, bench_dijkstra);
criterion_main!(benches);
