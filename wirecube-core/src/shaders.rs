/// GLSL sources for the wireframe pipeline

pub const VERTEX_SHADER: &str = "attribute vec3 position;
uniform mat4 modelMatrix;
uniform mat4 viewMatrix;
uniform mat4 projectionMatrix;
void main() {
  gl_Position = projectionMatrix * viewMatrix * modelMatrix * vec4(position, 1);
}
";

pub const FRAGMENT_SHADER: &str = "#ifdef GL_ES
precision mediump float;
#endif
void main() {
  gl_FragColor = vec4(0.0, 0.0, 0.0, 1.0);
}
";

pub const MODEL_MATRIX: &str = "modelMatrix";
pub const VIEW_MATRIX: &str = "viewMatrix";
pub const PROJECTION_MATRIX: &str = "projectionMatrix";

/// Uniforms resolved when the program is built
pub const UNIFORM_NAMES: [&str; 3] = [MODEL_MATRIX, VIEW_MATRIX, PROJECTION_MATRIX];

/// Vertex attribute fed from the cube buffer
pub const POSITION_ATTRIBUTE: &str = "position";
