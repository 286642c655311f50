//! Demonstration of ShatterPuzzle generation and mesh building

use shattered_mirror::*;

fn main() -> Result<()> {
    println!("Generating puzzle...");

    let config = PuzzleConfigBuilder::new()
        .seed(42)
        .shard_count(10)?
        .instance_id(1)
        .build()?;

    let puzzle = ShatterPuzzle::generate(config)?;

    println!("Generated {} shards", puzzle.shard_count());
    println!("Diagram area: {:.6}", puzzle.diagram().total_area());
    println!(
        "Internal edges: {}",
        puzzle.diagram().internal_edges().count()
    );

    println!("\nShards:");
    for (i, polygon) in puzzle.diagram().polygons().iter().enumerate() {
        println!(
            "  shard {:2}: {} vertices, area {:.4}, perimeter {:.4}",
            i,
            polygon.vertex_count(),
            polygon.area(),
            polygon.perimeter()
        );
    }

    let options = MeshOptions::default();
    let meshes = puzzle.shard_meshes(&options);
    let render_tris: usize = meshes.iter().map(|m| m.render.triangle_count()).sum();
    let collider_tris: usize = meshes.iter().map(|m| m.collider.triangle_count()).sum();
    println!("\nMeshes: {} render tris, {} collider tris", render_tris, collider_tris);

    // collision shapes for the host physics system
    let shapes: Result<Vec<_>> = meshes
        .iter()
        .map(|m| collider_trimesh(&m.collider))
        .collect();
    println!("Built {} collision shapes", shapes?.len());

    Ok(())
}
